use crate::foundation::error::{PosterError, PosterResult};
use crate::foundation::math::Fnv1a64;

/// Axis-aligned pixel rectangle, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Smallest rectangle covering both `self` and `other`.
    pub fn union(self, other: PixelRect) -> PixelRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = (self.x + self.width).max(other.x + other.width);
        let bottom = (self.y + self.height).max(other.y + other.height);
        PixelRect {
            x,
            y,
            width: right - x,
            height: bottom - y,
        }
    }
}

/// A rendered poster as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the flag keeps that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Premultiplied pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Copy out the pixels inside `rect`.
    pub fn crop(&self, rect: PixelRect) -> PosterResult<FrameRGBA> {
        let fits = rect.x.checked_add(rect.width).is_some_and(|r| r <= self.width)
            && rect.y.checked_add(rect.height).is_some_and(|b| b <= self.height);
        if !fits || self.data.len() != (self.width as usize) * (self.height as usize) * 4 {
            return Err(PosterError::render(format!(
                "crop {rect:?} does not fit a {}x{} frame",
                self.width, self.height
            )));
        }

        let row = (self.width as usize) * 4;
        let mut data = Vec::with_capacity((rect.width as usize) * (rect.height as usize) * 4);
        for y in rect.y..rect.y + rect.height {
            let start = (y as usize) * row + (rect.x as usize) * 4;
            data.extend_from_slice(&self.data[start..start + (rect.width as usize) * 4]);
        }
        Ok(FrameRGBA {
            width: rect.width,
            height: rect.height,
            data,
            premultiplied: self.premultiplied,
        })
    }

    /// Stable 64-bit digest of size and pixels.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u32(self.width);
        h.write_u32(self.height);
        h.write_bytes(&self.data);
        h.finish()
    }
}

/// Draw calls a backend actually executed for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Blob fills composited.
    pub blobs: usize,
    /// Text labels composited.
    pub labels: usize,
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
