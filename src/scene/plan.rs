use crate::config::LabelText;
use crate::foundation::color::ColorRgba;
use crate::foundation::core::{BezPath, Canvas, Point};
use crate::foundation::error::PosterResult;
use crate::foundation::rng::RandomStream;
use crate::generate::blob::generate_blob;
use crate::generate::palette::{Palette, generate_palette};
use crate::scene::params::RenderParameters;

/// Title placement, relative to the viewport (y up).
pub const TITLE_ANCHOR: Point = Point::new(0.05, 0.95);
/// Subtitle placement, relative to the viewport (y up).
pub const SUBTITLE_ANCHOR: Point = Point::new(0.05, 0.91);
/// Title size in points.
pub const TITLE_SIZE_PT: f64 = 18.0;
/// Subtitle size in points.
pub const SUBTITLE_SIZE_PT: f64 = 11.0;

/// A single draw call, in back-to-front order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Filled blob without outline. Geometry is in unit-square world space.
    FillBlob {
        /// Generation index; also the z-order.
        layer: u32,
        /// Closed outline.
        path: BezPath,
        /// Fill color with the sampled alpha.
        color: ColorRgba,
    },
    /// Left-aligned text whose baseline starts at `anchor`.
    Label {
        /// Text to draw.
        text: String,
        /// Viewport-relative anchor.
        anchor: Point,
        /// Font size in points.
        size_pt: f64,
        /// Bold weight.
        bold: bool,
    },
}

/// Everything needed to rasterize one poster, with all randomness already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct PosterPlan {
    /// Output raster size.
    pub canvas: Canvas,
    /// Resolution the canvas was derived from.
    pub dpi: u32,
    /// Canvas fill.
    pub background: ColorRgba,
    /// Palette the blobs were painted from.
    pub palette: Palette,
    /// Draw calls, back to front.
    pub ops: Vec<DrawOp>,
}

impl PosterPlan {
    /// Number of blob fills.
    pub fn blob_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillBlob { .. }))
            .count()
    }

    /// Number of text labels.
    pub fn label_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Label { .. }))
            .count()
    }
}

/// Resolve `params` into a draw plan at `dpi`.
///
/// Draw order from the stream: the palette right after seeding, then per layer the center x and
/// y, radius, wobble, one draw per vertex, the palette pick and the alpha. Labels take no draws.
#[tracing::instrument(level = "debug", skip(params, labels), fields(seed = params.seed))]
pub fn compile_poster(
    params: &RenderParameters,
    labels: &LabelText,
    dpi: u32,
) -> PosterResult<PosterPlan> {
    params.validate()?;
    let canvas = Canvas::for_dpi(dpi)?;

    let mut stream = RandomStream::new(params.seed);
    let palette = generate_palette(
        params.k_palette as usize,
        true,
        Some(params.seed),
        &mut stream,
    )?;

    let mut ops = Vec::with_capacity(params.n_layers as usize + 2);
    for layer in 0..params.n_layers {
        let center = Point::new(stream.next_f64(), stream.next_f64());
        let radius = stream.uniform(params.radius.min, params.radius.max);
        let wobble = stream.uniform(params.wobble.min, params.wobble.max);
        let blob = generate_blob(center, radius, params.points as usize, wobble, &mut stream)?;
        let color = palette.choose(&mut stream)?;
        let alpha = stream.uniform(params.alpha.min, params.alpha.max);

        tracing::trace!(layer, cx = center.x, cy = center.y, radius, wobble, alpha, "blob");
        ops.push(DrawOp::FillBlob {
            layer,
            path: blob.to_path(),
            color: color.with_alpha(alpha),
        });
    }

    if params.label_on {
        ops.push(DrawOp::Label {
            text: labels.title.clone(),
            anchor: TITLE_ANCHOR,
            size_pt: TITLE_SIZE_PT,
            bold: true,
        });
        ops.push(DrawOp::Label {
            text: labels.subtitle.clone(),
            anchor: SUBTITLE_ANCHOR,
            size_pt: SUBTITLE_SIZE_PT,
            bold: false,
        });
    }

    Ok(PosterPlan {
        canvas,
        dpi,
        background: params.background,
        palette,
        ops,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/plan.rs"]
mod tests;
