use crate::foundation::color::ColorRgb;
use crate::foundation::error::{PosterError, PosterResult};
use crate::foundation::rng::RandomStream;

/// Pastel remap: `v -> PASTEL_SCALE * v + PASTEL_FLOOR`.
pub const PASTEL_SCALE: f64 = 0.6;
/// Lowest channel value a pastel color can have.
pub const PASTEL_FLOOR: f64 = 0.4;

/// Ordered set of colors blobs are painted with.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<ColorRgb>,
}

impl Palette {
    /// Colors in generation order.
    pub fn colors(&self) -> &[ColorRgb] {
        &self.colors
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Return `true` when the palette holds no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Pick one color uniformly, with replacement.
    pub fn choose(&self, stream: &mut RandomStream) -> PosterResult<ColorRgb> {
        if self.colors.is_empty() {
            return Err(PosterError::invalid("cannot choose from an empty palette"));
        }
        Ok(self.colors[stream.index(self.colors.len())])
    }

    /// `#rrggbb` strings in generation order.
    pub fn to_hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

/// Generate `count` random colors.
///
/// When `seed` is set the stream is restarted at that seed first. Each color consumes three
/// draws (red, green, blue); `pastel` lifts every channel into `[0.4, 1.0]`.
pub fn generate_palette(
    count: usize,
    pastel: bool,
    seed: Option<u64>,
    stream: &mut RandomStream,
) -> PosterResult<Palette> {
    if count == 0 {
        return Err(PosterError::invalid("palette size must be >= 1"));
    }
    if let Some(seed) = seed {
        stream.reseed(seed);
    }

    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        let mut rgb = [stream.next_f64(), stream.next_f64(), stream.next_f64()];
        if pastel {
            for v in &mut rgb {
                *v = PASTEL_SCALE * *v + PASTEL_FLOOR;
            }
        }
        colors.push(ColorRgb::new(rgb[0], rgb[1], rgb[2]));
    }

    Ok(Palette { colors })
}

#[cfg(test)]
#[path = "../../tests/unit/generate/palette.rs"]
mod tests;
