use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{PosterError, PosterResult};
use crate::scene::params::RenderParameters;

/// Default title text.
pub const DEFAULT_TITLE: &str = "Generative Poster";
/// Default subtitle text.
pub const DEFAULT_SUBTITLE: &str = "Week 2 \u{2022} Arts & Advanced Big Data";

/// Text of the two poster labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelText {
    /// Bold headline.
    pub title: String,
    /// Smaller line below the title.
    pub subtitle: String,
}

impl Default for LabelText {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            subtitle: DEFAULT_SUBTITLE.to_owned(),
        }
    }
}

/// Renderer settings that do not change the random draws.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Resolution of on-screen renders.
    pub preview_dpi: u32,
    /// Resolution of PNG exports.
    pub export_dpi: u32,
    /// Extra directory scanned for `.ttf`/`.otf`/`.ttc` label fonts.
    pub font_dir: Option<PathBuf>,
    /// Label text.
    pub labels: LabelText,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            preview_dpi: 200,
            export_dpi: 300,
            font_dir: None,
            labels: LabelText::default(),
        }
    }
}

/// On-disk configuration: a parameter set plus renderer settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PosterConfig {
    /// Poster parameters.
    pub params: RenderParameters,
    /// Renderer settings.
    pub settings: RenderSettings,
}

impl PosterConfig {
    /// Parse a JSON configuration.
    pub fn from_json_str(s: &str) -> PosterResult<Self> {
        serde_json::from_str(s).map_err(|e| PosterError::serde(format!("config json: {e}")))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: &Path) -> PosterResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty JSON.
    pub fn to_json_string(&self) -> PosterResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PosterError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
