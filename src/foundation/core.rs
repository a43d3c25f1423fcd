use crate::foundation::error::{PosterError, PosterResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Poster width in inches.
pub const PAGE_WIDTH_IN: u32 = 7;
/// Poster height in inches.
pub const PAGE_HEIGHT_IN: u32 = 10;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Canvas of the fixed 7:10 poster page rasterized at `dpi`.
    pub fn for_dpi(dpi: u32) -> PosterResult<Self> {
        if dpi == 0 {
            return Err(PosterError::invalid("dpi must be > 0"));
        }
        let width = PAGE_WIDTH_IN.checked_mul(dpi);
        let height = PAGE_HEIGHT_IN.checked_mul(dpi);
        match (width, height) {
            (Some(width), Some(height)) if height <= u32::from(u16::MAX) => {
                Ok(Self { width, height })
            }
            _ => Err(PosterError::invalid(format!(
                "dpi {dpi} exceeds the maximum raster size ({} px tall)",
                u16::MAX
            ))),
        }
    }

    /// The square, equal-aspect region that shows the unit square.
    ///
    /// It spans the full width and is centered vertically.
    pub fn viewport(self) -> Viewport {
        let side = self.width.min(self.height);
        Viewport {
            x: (self.width - side) / 2,
            y: (self.height - side) / 2,
            side,
        }
    }
}

/// Pixel placement of the unit-square view inside a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Edge length in pixels.
    pub side: u32,
}

impl Viewport {
    /// Map unit-square world coordinates (y up) to viewport pixels (y down).
    pub fn world_to_px(self) -> Affine {
        let s = f64::from(self.side);
        Affine::new([s, 0.0, 0.0, -s, 0.0, s])
    }

    /// Map a viewport-relative anchor (`0..1`, y up) to viewport pixels.
    pub fn anchor_px(self, anchor: Point) -> Point {
        self.world_to_px() * anchor
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel premultiplied by alpha.
    pub r: u8,
    /// Green channel premultiplied by alpha.
    pub g: u8,
    /// Blue channel premultiplied by alpha.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Convert straight-alpha RGBA8 into premultiplied RGBA8.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Bytes in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
