use serde::{Deserialize, Serialize};

use crate::foundation::color::ColorRgba;
use crate::foundation::error::{PosterError, PosterResult};

/// Inclusive `[min, max]` range sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound, must be `>= min`.
    pub max: f64,
}

impl FloatRange {
    /// Build a range without validating it.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(self, name: &str, floor: f64, ceil: f64) -> PosterResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PosterError::invalid(format!("{name} range must be finite")));
        }
        if self.min > self.max {
            return Err(PosterError::invalid(format!(
                "{name} range is inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        if self.min < floor || self.max > ceil {
            return Err(PosterError::invalid(format!(
                "{name} range [{}, {}] must lie within [{floor}, {ceil}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Ranges the parameter controls offer.
///
/// [`RenderParameters::validate`] only enforces what rendering needs;
/// [`RenderParameters::validate_ui_bounds`] checks these on top.
pub mod ui_bounds {
    /// Largest seed the controls accept.
    pub const SEED_MAX: u64 = 999_999;
    /// Layer count range.
    pub const LAYERS: (u32, u32) = (3, 30);
    /// Palette size range.
    pub const PALETTE: (u32, u32) = (3, 12);
    /// Points-per-shape range.
    pub const POINTS: (u32, u32) = (80, 600);
    /// Wobble slider range.
    pub const WOBBLE: (f64, f64) = (0.0, 0.5);
    /// Radius slider range.
    pub const RADIUS: (f64, f64) = (0.05, 0.6);
    /// Alpha slider range.
    pub const ALPHA: (f64, f64) = (0.05, 1.0);
}

/// Everything that determines one poster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderParameters {
    /// Seed of the random stream.
    pub seed: u64,
    /// Canvas fill color.
    pub background: ColorRgba,
    /// Number of palette colors.
    pub k_palette: u32,
    /// Number of blobs, drawn back to front.
    pub n_layers: u32,
    /// Vertices per blob.
    pub points: u32,
    /// Wobble sampled per blob.
    pub wobble: FloatRange,
    /// Radius sampled per blob, in unit-square units.
    pub radius: FloatRange,
    /// Fill opacity sampled per blob.
    pub alpha: FloatRange,
    /// Draw the title and subtitle.
    pub label_on: bool,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            seed: 42,
            background: ColorRgba::rgba(250.0 / 255.0, 250.0 / 255.0, 247.0 / 255.0, 1.0),
            k_palette: 6,
            n_layers: 8,
            points: 220,
            wobble: FloatRange::new(0.05, 0.25),
            radius: FloatRange::new(0.15, 0.45),
            alpha: FloatRange::new(0.25, 0.60),
            label_on: true,
        }
    }
}

impl RenderParameters {
    /// Reject parameters that cannot be rendered.
    ///
    /// Inverted ranges are errors, never silently swapped or clamped.
    pub fn validate(&self) -> PosterResult<()> {
        if self.k_palette == 0 {
            return Err(PosterError::invalid("palette size must be >= 1"));
        }
        if self.points < 3 {
            return Err(PosterError::invalid(format!(
                "points per shape must be >= 3 (got {})",
                self.points
            )));
        }
        self.wobble.validate("wobble", 0.0, f64::INFINITY)?;
        self.radius.validate("radius", f64::MIN_POSITIVE, f64::INFINITY)?;
        self.alpha.validate("alpha", 0.0, 1.0)?;
        let bg = self.background;
        if ![bg.r, bg.g, bg.b, bg.a]
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
        {
            return Err(PosterError::invalid(
                "background channels must lie within [0, 1]",
            ));
        }
        Ok(())
    }

    /// [`RenderParameters::validate`], then reject anything the parameter controls could not
    /// have produced.
    pub fn validate_ui_bounds(&self) -> PosterResult<()> {
        self.validate()?;
        if self.seed > ui_bounds::SEED_MAX {
            return Err(PosterError::invalid(format!(
                "seed {} must lie within [0, {}]",
                self.seed,
                ui_bounds::SEED_MAX
            )));
        }
        check_count("n_layers", self.n_layers, ui_bounds::LAYERS)?;
        check_count("k_palette", self.k_palette, ui_bounds::PALETTE)?;
        check_count("points", self.points, ui_bounds::POINTS)?;
        let (lo, hi) = ui_bounds::WOBBLE;
        self.wobble.validate("wobble", lo, hi)?;
        let (lo, hi) = ui_bounds::RADIUS;
        self.radius.validate("radius", lo, hi)?;
        let (lo, hi) = ui_bounds::ALPHA;
        self.alpha.validate("alpha", lo, hi)
    }
}

fn check_count(name: &str, value: u32, (lo, hi): (u32, u32)) -> PosterResult<()> {
    if (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(PosterError::invalid(format!(
            "{name} {value} must lie within [{lo}, {hi}]"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/params.rs"]
mod tests;
