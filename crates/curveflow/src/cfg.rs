//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; the flow itself is parameterized through `FlowCfg`,
//!   these only guard numerically degenerate inputs.

/// Edges at or below this length cannot be normalized into a tangent.
pub(crate) const EDGE_EPS: f64 = 0.0;
/// Default explicit Euler time step, one animation tick.
pub(crate) const DEFAULT_DELTA_T: f64 = 0.01;
/// Smallest radius handed out by the ring sampler.
pub(crate) const MIN_RADIUS: f64 = 1e-6;
