//! Discrete differential geometry on a closed ring.
//!
//! All functions index cyclically (`(i + 1) mod n`) and are pure.
//! - `compute_tangents`: unit edge directions `v[i] → v[i+1]`.
//! - `compute_normals`: tangents rotated 90° left, `(-t.y, t.x)`.
//! - `compute_curvatures`: `|t[i+1] - t[i]|`, equal to `2·sin(Δθ/2)` for unit
//!   tangents. A turning-angle proxy, not arc-length normalized.
//!
//! Code cross-refs: `flow::step_component`, `flow::discrete_point_curvature`.

use crate::cfg::EDGE_EPS;
use crate::curve::Point2;
use crate::error::GeometryError;

/// Unit tangent per vertex, pointing at its cyclic successor.
///
/// Fails on the first zero-length (or non-finite) edge instead of producing NaN.
/// A single-vertex ring is its own successor and therefore always degenerate.
pub fn compute_tangents(vertices: &[Point2]) -> Result<Vec<Point2>, GeometryError> {
    let n = vertices.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let d = vertices[(i + 1) % n] - vertices[i];
        let length = crate::length(d);
        if !length.is_finite() || length <= EDGE_EPS {
            return Err(GeometryError::DegenerateEdge { index: i, length });
        }
        out.push(d / length);
    }
    Ok(out)
}

/// Left normal per tangent. Norm-preserving.
pub fn compute_normals(tangents: &[Point2]) -> Vec<Point2> {
    tangents.iter().map(|t| Point2::new(-t.y, t.x)).collect()
}

/// Distance between consecutive tangents (cyclic).
pub fn compute_curvatures(tangents: &[Point2]) -> Vec<f64> {
    let n = tangents.len();
    (0..n)
        .map(|i| (tangents[(i + 1) % n] - tangents[i]).norm())
        .collect()
}
