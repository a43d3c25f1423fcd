use crate::{
    config::RenderSettings,
    foundation::error::{PosterError, PosterResult},
    generate::palette::Palette,
    render::backend::{FrameRGBA, PixelRect, RenderStats},
    render::cpu::CpuBackend,
    render::export::{PngExport, encode_png},
    render::passes::execute_plan,
    scene::params::RenderParameters,
    scene::plan::compile_poster,
};

/// One rendered poster.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedImage {
    /// Premultiplied pixels.
    pub frame: FrameRGBA,
    /// Resolution the frame was rasterized at.
    pub dpi: u32,
    /// Palette the blobs were painted from.
    pub palette: Palette,
    /// Draw calls that produced the frame.
    pub stats: RenderStats,
    /// Tight bounds of the poster content inside `frame`: the unit-square view plus any label
    /// ink reaching outside it.
    pub content: PixelRect,
}

impl RenderedImage {
    /// Encode the frame as PNG, cropped to [`RenderedImage::content`] with no padding.
    pub fn to_png(&self) -> PosterResult<PngExport> {
        let cropped = self.frame.crop(self.content)?;
        Ok(PngExport {
            bytes: encode_png(&cropped)?,
            width: cropped.width,
            height: cropped.height,
            dpi: self.dpi,
        })
    }
}

/// Renders posters at the configured preview and export resolutions.
///
/// The renderer keeps a font database between calls; outputs depend only on the parameters and
/// settings.
pub struct PosterRenderer {
    settings: RenderSettings,
    backend: CpuBackend,
}

impl PosterRenderer {
    /// Create a renderer.
    pub fn new(settings: RenderSettings) -> Self {
        let backend = CpuBackend::new(settings.font_dir.clone());
        Self { settings, backend }
    }

    /// Settings this renderer was built with.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render at the preview resolution.
    pub fn render(&mut self, params: &RenderParameters) -> PosterResult<RenderedImage> {
        self.render_at(params, self.settings.preview_dpi)
    }

    /// Render at the export resolution and encode as a tightly cropped PNG.
    pub fn export_png(&mut self, params: &RenderParameters) -> PosterResult<PngExport> {
        self.render_at(params, self.settings.export_dpi)?.to_png()
    }

    /// Render at an explicit resolution.
    #[tracing::instrument(level = "debug", skip(self, params), fields(seed = params.seed))]
    pub fn render_at(&mut self, params: &RenderParameters, dpi: u32) -> PosterResult<RenderedImage> {
        let plan = compile_poster(params, &self.settings.labels, dpi)?;
        let frame = execute_plan(&mut self.backend, &plan)?;
        let stats = self.backend.last_stats();
        let content = self
            .backend
            .last_content()
            .ok_or_else(|| PosterError::render("backend reported no content bounds"))?;

        tracing::debug!(
            width = frame.width,
            height = frame.height,
            blobs = stats.blobs,
            labels = stats.labels,
            "rendered poster"
        );

        Ok(RenderedImage {
            frame,
            dpi,
            palette: plan.palette,
            stats,
            content,
        })
    }
}

/// Render once with a throwaway renderer at the preview resolution.
pub fn render_poster(
    params: &RenderParameters,
    settings: &RenderSettings,
) -> PosterResult<RenderedImage> {
    PosterRenderer::new(settings.clone()).render(params)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
