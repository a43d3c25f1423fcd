use std::io::Cursor;

use anyhow::Context as _;

use crate::foundation::error::{PosterError, PosterResult};
use crate::foundation::math::unpremultiply_rgba8;
use crate::render::backend::FrameRGBA;

/// Suggested download name.
pub const EXPORT_FILE_NAME: &str = "poster.png";
/// MIME type of exported bytes.
pub const EXPORT_MIME: &str = "image/png";

/// An encoded poster ready to be saved or offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PngExport {
    /// PNG file bytes.
    pub bytes: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Resolution the poster was rasterized at.
    pub dpi: u32,
}

impl PngExport {
    /// Suggested file name.
    pub fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }

    /// MIME type of [`PngExport::bytes`].
    pub fn mime(&self) -> &'static str {
        EXPORT_MIME
    }
}

/// Encode a frame as straight-alpha RGBA8 PNG.
pub fn encode_png(frame: &FrameRGBA) -> PosterResult<Vec<u8>> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(PosterError::render(format!(
            "frame byte length {} does not match {}x{}",
            frame.data.len(),
            frame.width,
            frame.height
        )));
    }

    let straight = if frame.premultiplied {
        frame
            .data
            .chunks_exact(4)
            .flat_map(|px| unpremultiply_rgba8([px[0], px[1], px[2], px[3]]))
            .collect()
    } else {
        frame.data.clone()
    };

    let img = image::RgbaImage::from_raw(frame.width, frame.height, straight)
        .ok_or_else(|| PosterError::render("frame buffer does not fit its dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/export.rs"]
mod tests;
