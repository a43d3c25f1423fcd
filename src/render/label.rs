use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::Point;
use crate::foundation::error::{PosterError, PosterResult};

/// Families tried for label text, in order.
const LABEL_FAMILIES: &str = "'DejaVu Sans', 'Liberation Sans', Arial, Helvetica, sans-serif";

/// A label positioned in viewport pixels.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PlacedLabel {
    pub(crate) text: String,
    /// Baseline start in canvas pixels (y down).
    pub(crate) origin: Point,
    pub(crate) size_px: f64,
    pub(crate) bold: bool,
}

/// Rasterizes poster labels through an SVG text document.
pub(crate) struct LabelRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl LabelRasterizer {
    /// Load system fonts plus any fonts found directly inside `font_dir`.
    pub(crate) fn new(font_dir: Option<&Path>) -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        if let Some(dir) = font_dir {
            load_fonts_from_dir(&mut db, dir);
        }

        let faces = db.faces().count();
        if faces == 0 {
            tracing::warn!("no fonts found; poster labels will be blank");
        } else {
            tracing::debug!(faces, "label font database ready");
        }

        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Rasterize `labels` into a transparent `width x height` premultiplied RGBA8 layer.
    pub(crate) fn rasterize(
        &self,
        labels: &[PlacedLabel],
        width: u32,
        height: u32,
    ) -> PosterResult<Vec<u8>> {
        let svg = label_svg(labels, width, height);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            font_resolver: make_font_resolver(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts).context("parse label svg")?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| PosterError::render("failed to allocate label pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap.data().to_vec())
    }
}

pub(crate) fn label_svg(labels: &[PlacedLabel], width: u32, height: u32) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">"
    );
    for label in labels {
        let weight = if label.bold { "bold" } else { "normal" };
        svg.push_str(&format!(
            "<text x=\"{:.3}\" y=\"{:.3}\" font-family=\"{LABEL_FAMILIES}\" font-size=\"{:.3}\" \
             font-weight=\"{weight}\" fill=\"#000000\">{}</text>",
            label.origin.x,
            label.origin.y,
            label.size_px,
            escape_xml(&label.text)
        ));
    }
    svg.push_str("</svg>");
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping font file");
        }
    }
}

/// Resolve requested families, then fall back to any sans-serif face, then to any face at all.
fn make_font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;
    use usvg::fontdb::{Family, Query, Stretch, Style, Weight};

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families: Vec<Family<'_>> = font
                .families()
                .iter()
                .map(|family| match family {
                    usvg::FontFamily::Serif => Family::Serif,
                    usvg::FontFamily::SansSerif => Family::SansSerif,
                    usvg::FontFamily::Cursive => Family::Cursive,
                    usvg::FontFamily::Fantasy => Family::Fantasy,
                    usvg::FontFamily::Monospace => Family::Monospace,
                    usvg::FontFamily::Named(s) => Family::Name(s),
                })
                .collect();
            families.push(Family::SansSerif);

            let style = match font.style() {
                usvg::FontStyle::Normal => Style::Normal,
                usvg::FontStyle::Italic => Style::Italic,
                usvg::FontStyle::Oblique => Style::Oblique,
            };

            let query = Query {
                families: &families,
                weight: Weight(font.weight()),
                stretch: Stretch::Normal,
                style,
            };

            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/label.rs"]
mod tests;
