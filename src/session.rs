use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    config::RenderSettings,
    foundation::error::{PosterError, PosterResult},
    foundation::rng::RandomStream,
    render::export::PngExport,
    render::pipeline::{PosterRenderer, RenderedImage},
    scene::params::{RenderParameters, ui_bounds},
};

/// When a session re-renders its preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderTrigger {
    /// Every confirmed parameter change renders immediately.
    #[default]
    OnChange,
    /// Parameter changes are staged; only [`PosterSession::generate`] renders.
    OnGenerate,
}

/// Interactive state behind a parameter panel: current parameters plus the last preview.
pub struct PosterSession {
    renderer: PosterRenderer,
    trigger: RenderTrigger,
    params: RenderParameters,
    rendered: Option<(RenderParameters, RenderedImage)>,
    seeds: RandomStream,
    renders: u64,
}

impl PosterSession {
    /// Start a session. Nothing is rendered until the first change or `generate`.
    pub fn new(settings: RenderSettings, params: RenderParameters, trigger: RenderTrigger) -> Self {
        let entropy = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed_source(settings, params, trigger, RandomStream::new(entropy))
    }

    /// Like [`PosterSession::new`] with an explicit stream for seed shuffling.
    pub fn with_seed_source(
        settings: RenderSettings,
        params: RenderParameters,
        trigger: RenderTrigger,
        seeds: RandomStream,
    ) -> Self {
        Self {
            renderer: PosterRenderer::new(settings),
            trigger,
            params,
            rendered: None,
            seeds,
            renders: 0,
        }
    }

    /// Parameters the next render will use.
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    /// Most recent preview, if any.
    pub fn current(&self) -> Option<&RenderedImage> {
        self.rendered.as_ref().map(|(_, img)| img)
    }

    /// `true` when the preview is missing or was rendered from other parameters.
    pub fn is_stale(&self) -> bool {
        self.rendered
            .as_ref()
            .is_none_or(|(params, _)| *params != self.params)
    }

    /// Number of renders performed so far.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    /// Apply a confirmed parameter change.
    ///
    /// Invalid parameters are rejected and leave the session untouched. Returns the fresh preview
    /// when this call rendered one.
    pub fn set_params(&mut self, params: RenderParameters) -> PosterResult<Option<&RenderedImage>> {
        params.validate()?;
        if params == self.params && !self.is_stale() {
            return Ok(None);
        }
        self.params = params;
        match self.trigger {
            RenderTrigger::OnChange => self.render_current().map(Some),
            RenderTrigger::OnGenerate => Ok(None),
        }
    }

    /// Explicit generate action: render unless the preview is already current.
    pub fn generate(&mut self) -> PosterResult<&RenderedImage> {
        if self.is_stale() {
            return self.render_current();
        }
        self.current()
            .ok_or_else(|| PosterError::render("preview missing for current parameters"))
    }

    /// Replace the seed with a fresh one in `[0, 999999]` and apply the change.
    pub fn shuffle_seed(&mut self) -> PosterResult<u64> {
        let seed = self.seeds.below_inclusive(ui_bounds::SEED_MAX);
        let params = RenderParameters {
            seed,
            ..self.params.clone()
        };
        self.set_params(params)?;
        Ok(seed)
    }

    /// Render the current parameters at export resolution.
    pub fn export_png(&mut self) -> PosterResult<PngExport> {
        self.renderer.export_png(&self.params)
    }

    fn render_current(&mut self) -> PosterResult<&RenderedImage> {
        let img = self.renderer.render(&self.params)?;
        self.renders += 1;
        tracing::debug!(renders = self.renders, seed = self.params.seed, "preview updated");
        let (_, img) = self.rendered.insert((self.params.clone(), img));
        Ok(&*img)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
