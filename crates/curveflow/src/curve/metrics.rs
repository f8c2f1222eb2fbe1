//! Scalar diagnostics of a ring (cyclic, like everything else here).

use super::types::Point2;
use crate::{length, parallelogram_area};

/// Sum of edge lengths including the closing edge.
pub fn perimeter(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| length(vertices[(i + 1) % n] - vertices[i]))
        .sum()
}

/// Shoelace signed area. Positive for counterclockwise rings.
pub fn signed_area(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| parallelogram_area(vertices[i], vertices[(i + 1) % n]))
        .sum();
    twice / 2.0
}

/// Arithmetic mean of the vertices, `None` for an empty ring.
pub fn vertex_centroid(vertices: &[Point2]) -> Option<Point2> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices.iter().fold(Point2::zeros(), |acc, p| acc + p);
    Some(sum / vertices.len() as f64)
}

/// Per-vertex distance to the vertex centroid.
pub fn radial_distances(vertices: &[Point2]) -> Vec<f64> {
    match vertex_centroid(vertices) {
        Some(c) => vertices.iter().map(|p| length(p - c)).collect(),
        None => Vec::new(),
    }
}
