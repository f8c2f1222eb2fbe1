//! Curve model and the "vert" text codec.
//!
//! Purpose
//! - `CurveComponent`: one closed ring of 2D points (index n−1 wraps to 0).
//! - `CurveCollection`: the ordered components loaded from one source.
//! - Codec: line-oriented "vert" format, parse and serialize, no partial loads.
//!
//! Code cross-refs: `diffgeo::compute_tangents`, `flow::step_evolution`.

mod codec;
pub mod metrics;
mod types;

pub use codec::{
    load_collection, parse_str, read_collection, save_collection, to_vert_string,
    write_collection,
};
pub use types::{CurveCollection, CurveComponent, Point2};

#[cfg(test)]
mod tests;
