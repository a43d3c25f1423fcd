//! blobposter renders seeded generative "blob" posters.
//!
//! A poster is a 7:10 page filled with a background color, overlaid with irregular, translucent
//! blob polygons painted from a random pastel palette, plus an optional title and subtitle. The
//! whole image is a pure function of [`RenderParameters`]: the same parameters (seed included)
//! always produce the same pixels and the same PNG bytes.
//!
//! # Pipeline overview
//!
//! 1. **Plan**: `RenderParameters -> PosterPlan`. A [`RandomStream`] is seeded, the palette is
//!    drawn, then every layer's center, radius, wobble, outline, color and alpha.
//! 2. **Rasterize**: `PosterPlan -> FrameRGBA` through a [`DrawBackend`] ([`CpuBackend`]).
//! 3. **Export** (optional): `FrameRGBA -> PNG` bytes.
//!
//! [`PosterRenderer`] runs the whole pipeline; [`PosterSession`] adds the interactive layer
//! (render on confirmed change or on explicit generate, seed shuffling, export).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod generate;
mod render;
mod scene;
mod session;

pub use config::{DEFAULT_SUBTITLE, DEFAULT_TITLE, LabelText, PosterConfig, RenderSettings};
pub use foundation::color::{ColorRgb, ColorRgba};
pub use foundation::core::{
    Affine, BezPath, Canvas, PAGE_HEIGHT_IN, PAGE_WIDTH_IN, Point, Rect, Rgba8Premul, Vec2,
    Viewport,
};
pub use foundation::error::{PosterError, PosterResult};
pub use foundation::rng::RandomStream;
pub use generate::blob::{BlobShape, generate_blob};
pub use generate::palette::{PASTEL_FLOOR, PASTEL_SCALE, Palette, generate_palette};
pub use render::backend::{FrameRGBA, PixelRect, RenderStats};
pub use render::cpu::CpuBackend;
pub use render::export::{EXPORT_FILE_NAME, EXPORT_MIME, PngExport, encode_png};
pub use render::passes::{DrawBackend, execute_plan};
pub use render::pipeline::{PosterRenderer, RenderedImage, render_poster};
pub use scene::params::{FloatRange, RenderParameters, ui_bounds};
pub use scene::plan::{
    DrawOp, PosterPlan, SUBTITLE_ANCHOR, SUBTITLE_SIZE_PT, TITLE_ANCHOR, TITLE_SIZE_PT,
    compile_poster,
};
pub use session::{PosterSession, RenderTrigger};
