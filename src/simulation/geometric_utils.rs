//! Geometric utility functions for distances, directions and footprint overlap.

use geo::{Distance, Euclidean, Point, Rect};
use ndarray::Array1;

/// Euclidean distance between two 2D positions.
pub fn distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(to_point(a), to_point(b))
}

/// Unit vector pointing from `from` towards `to`.
///
/// Returns the zero vector when both points coincide; a degenerate direction is a
/// normal case, not an error.
pub fn direction(from: &Array1<f32>, to: &Array1<f32>) -> Array1<f32> {
    let delta = to - from;
    let length = delta.mapv(|x| x * x).sum().sqrt();
    if length > 0.0 {
        delta / length
    } else {
        Array1::zeros(2)
    }
}

/// Returns `true` when the interiors of two boxes intersect.
///
/// Boxes that only share an edge do not overlap.
pub fn boxes_overlap(a: &Rect<f32>, b: &Rect<f32>) -> bool {
    a.min().x < b.max().x && a.max().x > b.min().x && a.min().y < b.max().y && a.max().y > b.min().y
}

/// Converts a 2D position vector into a `geo` point.
pub fn to_point(v: &Array1<f32>) -> Point<f32> {
    Point::new(v[0], v[1])
}
