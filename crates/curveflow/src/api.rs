//! Curated surface for the visualization layer and the CLI (UNSTABLE).
//!
//! A driver needs exactly these: load, query per-vertex geometry for overlays,
//! step once per tick. Breaking changes are allowed.

// Model and codec
pub use crate::curve::metrics::{perimeter, radial_distances, signed_area, vertex_centroid};
pub use crate::curve::{
    load_collection, parse_str, read_collection, save_collection, to_vert_string,
    write_collection, CurveCollection, CurveComponent, Point2,
};
// Read-only overlay queries
pub use crate::diffgeo::{compute_curvatures, compute_normals, compute_tangents};
pub use crate::flow::{discrete_point_curvature, point_curvatures};
// Evolution
pub use crate::flow::{
    evolve, step_component, step_evolution, DegeneratePolicy, EvolveSummary, FlowCfg,
    SkippedStep,
};
// Sample rings
pub use crate::rand::{draw_collection, draw_ring_radial, ReplayToken, RingCfg, VertexCount};
// Errors
pub use crate::error::{FlowError, FormatError, FormatErrorKind, GeometryError};
