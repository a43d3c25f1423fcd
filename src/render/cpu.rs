use std::path::PathBuf;

use crate::{
    foundation::color::ColorRgba,
    foundation::core::{Affine, BezPath, Point, Vec2, Viewport},
    foundation::error::{PosterError, PosterResult},
    render::backend::{FrameRGBA, PixelRect, RenderStats},
    render::composite,
    render::label::{LabelRasterizer, PlacedLabel},
    render::passes::DrawBackend,
    scene::plan::PosterPlan,
};

/// CPU backend: blobs rasterized by `vello_cpu`, labels by `resvg`.
pub struct CpuBackend {
    font_dir: Option<PathBuf>,
    labels: Option<LabelRasterizer>,
    frame: Option<FrameState>,
    last_stats: RenderStats,
    last_content: Option<PixelRect>,
}

struct FrameState {
    viewport: Viewport,
    dpi: u32,
    world_to_px: Affine,
    ctx: vello_cpu::RenderContext,
    pending_labels: Vec<PlacedLabel>,
    stats: RenderStats,
}

impl CpuBackend {
    /// Create a backend; `font_dir` adds label fonts on top of the system ones.
    pub fn new(font_dir: Option<PathBuf>) -> Self {
        Self {
            font_dir,
            labels: None,
            frame: None,
            last_stats: RenderStats::default(),
            last_content: None,
        }
    }

    /// Draw calls executed by the most recently finished frame.
    pub fn last_stats(&self) -> RenderStats {
        self.last_stats
    }

    /// Bounds of the visible content of the most recently finished frame: the view plus any
    /// label ink outside it.
    pub fn last_content(&self) -> Option<PixelRect> {
        self.last_content
    }

    fn frame_mut(&mut self) -> PosterResult<&mut FrameState> {
        self.frame
            .as_mut()
            .ok_or_else(|| PosterError::render("draw call outside begin_frame/finish_frame"))
    }

    fn label_rasterizer(&mut self) -> &LabelRasterizer {
        let font_dir = self.font_dir.as_deref();
        self.labels
            .get_or_insert_with(|| LabelRasterizer::new(font_dir))
    }
}

impl DrawBackend for CpuBackend {
    fn begin_frame(&mut self, plan: &PosterPlan) -> PosterResult<()> {
        let viewport = plan.canvas.viewport();
        let side: u16 = viewport
            .side
            .try_into()
            .map_err(|_| PosterError::render("viewport size exceeds u16"))?;

        self.frame = Some(FrameState {
            viewport,
            dpi: plan.dpi,
            world_to_px: viewport.world_to_px(),
            ctx: vello_cpu::RenderContext::new(side, side),
            pending_labels: Vec::new(),
            stats: RenderStats::default(),
        });
        Ok(())
    }

    fn fill_blob(&mut self, layer: u32, path: &BezPath, color: ColorRgba) -> PosterResult<()> {
        let frame = self.frame_mut()?;
        frame.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        frame.ctx.set_transform(affine_to_cpu(frame.world_to_px));
        frame
            .ctx
            .set_paint(vello_cpu::peniko::Color::new(color.to_f32_array()));
        frame.ctx.fill_path(&bezpath_to_cpu(path));
        frame.stats.blobs += 1;
        tracing::trace!(layer, "fill blob");
        Ok(())
    }

    fn draw_label(
        &mut self,
        text: &str,
        anchor: Point,
        size_pt: f64,
        bold: bool,
    ) -> PosterResult<()> {
        let frame = self.frame_mut()?;
        let vp = frame.viewport;
        frame.pending_labels.push(PlacedLabel {
            text: text.to_owned(),
            origin: vp.anchor_px(anchor) + Vec2::new(f64::from(vp.x), f64::from(vp.y)),
            size_px: size_pt * f64::from(frame.dpi) / 72.0,
            bold,
        });
        frame.stats.labels += 1;
        Ok(())
    }

    fn finish_frame(&mut self, plan: &PosterPlan) -> PosterResult<FrameRGBA> {
        let mut frame = self
            .frame
            .take()
            .ok_or_else(|| PosterError::render("finish_frame without begin_frame"))?;
        let vp = frame.viewport;
        let side = vp.side as u16;

        // Blobs are rasterized onto a transparent square the size of the view, which clips them
        // to the unit square.
        let mut pixmap = vello_cpu::Pixmap::new(side, side);
        frame.ctx.flush();
        frame.ctx.render_to_pixmap(&mut pixmap);
        let layer = pixmap.data_as_u8_slice();

        let (width, height) = (plan.canvas.width, plan.canvas.height);
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        composite::fill(&mut data, plan.background.to_rgba8_premul().to_array());
        composite::over_at(&mut data, width, layer, vp.side, vp.side, vp.x, vp.y)?;

        // Labels are not clipped to the view; they cover the whole page.
        let mut content = PixelRect {
            x: vp.x,
            y: vp.y,
            width: vp.side,
            height: vp.side,
        };
        if !frame.pending_labels.is_empty() {
            let text = self
                .label_rasterizer()
                .rasterize(&frame.pending_labels, width, height)?;
            if let Some(ink) = composite::alpha_bounds(&text, width) {
                content = content.union(ink);
            }
            composite::over_in_place(&mut data, &text)?;
        }

        self.last_stats = frame.stats;
        self.last_content = Some(content);
        Ok(FrameRGBA {
            width,
            height,
            data,
            premultiplied: true,
        })
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
