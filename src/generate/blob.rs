use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{PosterError, PosterResult};
use crate::foundation::rng::RandomStream;

/// Irregular closed polygon approximating a circle, in unit-square world space.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobShape {
    center: Point,
    points: Vec<Point>,
}

impl BlobShape {
    /// Center the vertices were sampled around.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Vertices in angle order. The first and last sit at angles `0` and `2π`.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Closed polygon path through every vertex.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut iter = self.points.iter();
        if let Some(&first) = iter.next() {
            path.move_to(first);
            for &p in iter {
                path.line_to(p);
            }
            path.close_path();
        }
        path
    }
}

/// Sample `point_count` vertices around `center`.
///
/// Angles are evenly spaced over `[0, 2π]` inclusive, so the outline closes on itself. Each
/// vertex consumes one draw `u` and sits at `radius * (1 + wobble * (u - 0.5))`.
pub fn generate_blob(
    center: Point,
    radius: f64,
    point_count: usize,
    wobble: f64,
    stream: &mut RandomStream,
) -> PosterResult<BlobShape> {
    if point_count < 3 {
        return Err(PosterError::invalid(format!(
            "blob point count must be >= 3 (got {point_count})"
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(PosterError::invalid(format!(
            "blob radius must be finite and > 0 (got {radius})"
        )));
    }
    if !wobble.is_finite() || wobble < 0.0 {
        return Err(PosterError::invalid(format!(
            "blob wobble must be finite and >= 0 (got {wobble})"
        )));
    }
    if !center.x.is_finite() || !center.y.is_finite() {
        return Err(PosterError::invalid("blob center must be finite"));
    }

    let step = std::f64::consts::TAU / (point_count - 1) as f64;
    let points = (0..point_count)
        .map(|i| {
            let angle = step * i as f64;
            let r = radius * (1.0 + wobble * (stream.next_f64() - 0.5));
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect();

    Ok(BlobShape { center, points })
}

#[cfg(test)]
#[path = "../../tests/unit/generate/blob.rs"]
mod tests;
