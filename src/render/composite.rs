use crate::foundation::error::{PosterError, PosterResult};
use crate::render::backend::PixelRect;

pub(crate) type PremulRgba8 = [u8; 4];

fn mul_div255(a: u16, b: u16) -> u8 {
    (((u32::from(a) * u32::from(b)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Premultiplied source-over.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` over `dst`, both tightly packed RGBA8 buffers of equal size.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> PosterResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PosterError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Fill a whole buffer with one premultiplied color.
pub(crate) fn fill(dst: &mut [u8], rgba: PremulRgba8) {
    for px in dst.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

/// Composite a `src_w x src_h` buffer over `dst` (row width `dst_w`) with its top-left corner at
/// `(x, y)`. The source must fit entirely inside the destination.
pub(crate) fn over_at(
    dst: &mut [u8],
    dst_w: u32,
    src: &[u8],
    src_w: u32,
    src_h: u32,
    x: u32,
    y: u32,
) -> PosterResult<()> {
    let dst_h = if dst_w == 0 {
        0
    } else {
        (dst.len() / 4 / dst_w as usize) as u32
    };
    if src.len() != (src_w as usize) * (src_h as usize) * 4
        || x.checked_add(src_w).is_none_or(|r| r > dst_w)
        || y.checked_add(src_h).is_none_or(|b| b > dst_h)
    {
        return Err(PosterError::render(format!(
            "{src_w}x{src_h} layer at ({x}, {y}) does not fit a {dst_w}x{dst_h} target"
        )));
    }

    let src_row = (src_w as usize) * 4;
    let dst_row = (dst_w as usize) * 4;
    for (row, s) in src.chunks_exact(src_row).enumerate() {
        let start = (y as usize + row) * dst_row + (x as usize) * 4;
        over_in_place(&mut dst[start..start + src_row], s)?;
    }
    Ok(())
}

/// Tight bounds of the pixels with non-zero alpha in a buffer `width` pixels wide.
pub(crate) fn alpha_bounds(buf: &[u8], width: u32) -> Option<PixelRect> {
    if width == 0 {
        return None;
    }
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (i, px) in buf.chunks_exact(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let (x, y) = ((i as u32) % width, (i as u32) / width);
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| PixelRect {
        x: x0,
        y: y0,
        width: x1 - x0 + 1,
        height: y1 - y0 + 1,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
