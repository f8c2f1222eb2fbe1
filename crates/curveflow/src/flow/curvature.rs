//! The two vertex-based curvature notions used by the flow and by readouts.
//!
//! They are deliberately distinct from `diffgeo::compute_curvatures`:
//! - `vertex_difference_curvatures`: `|v[i+1] - v[i]|`, the flow's speed term.
//!   Same pairwise-distance formula as the tangent version but applied to
//!   positions, so it carries units of length.
//! - `discrete_point_curvature`: circumradius curvature `1/R` of the triangle
//!   `(v[i-1], v[i], v[i+1])` via Heron's formula.

use crate::curve::Point2;
use crate::length;

/// Flow speed per vertex: distance from vertex `i` to its cyclic successor.
pub fn vertex_difference_curvatures(vertices: &[Point2]) -> Vec<f64> {
    let n = vertices.len();
    (0..n)
        .map(|i| length(vertices[(i + 1) % n] - vertices[i]))
        .collect()
}

/// Circumscribed-circle curvature at `index` from its two cyclic neighbours.
///
/// `4·area / (AB·BC·CA)` with Heron's area. Collinear or coincident points give
/// exactly `0.0`. `index` is taken modulo the ring length; an empty ring gives `0.0`.
pub fn discrete_point_curvature(vertices: &[Point2], index: usize) -> f64 {
    let n = vertices.len();
    if n == 0 {
        return 0.0;
    }
    let i = index % n;
    let a = vertices[(i + n - 1) % n];
    let b = vertices[i];
    let c = vertices[(i + 1) % n];

    let ab = length(b - a);
    let bc = length(c - b);
    let ca = length(a - c);
    let longest = ab.max(bc).max(ca);
    if longest == 0.0 {
        return 0.0;
    }

    // Heron on the triangle scaled to unit longest side; the product grows as length⁴.
    let (ab, bc, ca) = (ab / longest, bc / longest, ca / longest);
    let s = (ab + bc + ca) / 2.0;
    // Rounding can push the product slightly below zero for near-collinear points.
    let area = (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt();
    if area == 0.0 {
        return 0.0;
    }
    (4.0 * area) / (ab * bc * ca) / longest
}

/// `discrete_point_curvature` at every vertex.
pub fn point_curvatures(vertices: &[Point2]) -> Vec<f64> {
    (0..vertices.len())
        .map(|i| discrete_point_curvature(vertices, i))
        .collect()
}
