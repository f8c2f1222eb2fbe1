//! Closed polygonal curves: model, "vert" codec, discrete differential geometry,
//! and an explicit curvature-flow step.
//!
//! Layout
//! - `curve`: `CurveComponent`/`CurveCollection`, the text codec, ring metrics.
//! - `diffgeo`: per-vertex tangents, normals and tangent-difference curvature.
//! - `flow`: one Euler step of the curve-shortening-style flow, the multi-tick
//!   driver, and the Heron circumradius curvature used for readouts.
//! - `rand`: reproducible star-shaped rings for tests, benches and the CLI.
//!
//! Everything here is synchronous and stateless; the only mutation is the
//! whole-buffer swap of a component's vertices during a flow step.

pub mod api;
pub(crate) mod cfg;
pub mod curve;
pub mod diffgeo;
pub mod error;
pub mod flow;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use curve::{CurveCollection, CurveComponent, Point2};
pub use error::{FlowError, FormatError, FormatErrorKind, GeometryError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::curve::{
        load_collection, parse_str, save_collection, to_vert_string, CurveCollection,
        CurveComponent, Point2,
    };
    pub use crate::diffgeo::{compute_curvatures, compute_normals, compute_tangents};
    pub use crate::error::{FlowError, FormatError, GeometryError};
    pub use crate::flow::{
        discrete_point_curvature, evolve, step_component, step_evolution, DegeneratePolicy,
        FlowCfg,
    };
    pub use nalgebra::Vector2;
}

/// Euclidean length of `v` without squaring overflow (`hypot`).
#[inline]
pub fn length(v: Point2) -> f64 {
    v.x.hypot(v.y)
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}
