use crate::{
    foundation::color::ColorRgba,
    foundation::core::{BezPath, Point},
    foundation::error::PosterResult,
    render::backend::FrameRGBA,
    scene::plan::{DrawOp, PosterPlan},
};

/// Executes the draw calls of a [`PosterPlan`].
pub trait DrawBackend {
    /// Start a frame: allocate the canvas and fill the background.
    fn begin_frame(&mut self, plan: &PosterPlan) -> PosterResult<()>;

    /// Fill one blob outline (unit-square world space) with `color`, no stroke.
    fn fill_blob(&mut self, layer: u32, path: &BezPath, color: ColorRgba) -> PosterResult<()>;

    /// Draw left-aligned text with its baseline starting at the viewport-relative `anchor`.
    fn draw_label(
        &mut self,
        text: &str,
        anchor: Point,
        size_pt: f64,
        bold: bool,
    ) -> PosterResult<()>;

    /// Finish the frame and read back the pixels.
    fn finish_frame(&mut self, plan: &PosterPlan) -> PosterResult<FrameRGBA>;
}

/// Run every draw call of `plan`, back to front.
pub fn execute_plan<B: DrawBackend + ?Sized>(
    backend: &mut B,
    plan: &PosterPlan,
) -> PosterResult<FrameRGBA> {
    backend.begin_frame(plan)?;

    for op in &plan.ops {
        match op {
            DrawOp::FillBlob { layer, path, color } => backend.fill_blob(*layer, path, *color)?,
            DrawOp::Label {
                text,
                anchor,
                size_pt,
                bold,
            } => backend.draw_label(text, *anchor, *size_pt, *bold)?,
        }
    }

    backend.finish_frame(plan)
}

#[cfg(test)]
#[path = "../../tests/unit/render/passes.rs"]
mod tests;
