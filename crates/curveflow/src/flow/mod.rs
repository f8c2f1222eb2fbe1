//! Curvature flow: one explicit Euler step of a curve-shortening-style update.
//!
//! Step, per component
//! 1. `t = compute_tangents(v)`, `n = compute_normals(t)`,
//!    `k = vertex_difference_curvatures(v)`.
//! 2. `v'[i] = v[i] − Δt · k[i] · n[i]`.
//! 3. Swap `v'` in as a whole.
//!
//! The displacement is against the left normal, i.e. towards the right of the
//! traversal direction: inward for clockwise rings, outward for counterclockwise.
//!
//! Failure policy
//! - The step never suppresses a `GeometryError`. `step_evolution` aborts the
//!   whole batch and leaves every component untouched; `evolve` lets the caller
//!   pick `DegeneratePolicy::SkipComponent` instead.
//!
//! Code cross-refs: `diffgeo::{compute_tangents, compute_normals}`, `curve::CurveComponent`.

mod curvature;

pub use curvature::{discrete_point_curvature, point_curvatures, vertex_difference_curvatures};

use crate::cfg::DEFAULT_DELTA_T;
use crate::curve::{CurveCollection, CurveComponent, Point2};
use crate::diffgeo::{compute_normals, compute_tangents};
use crate::error::{FlowError, GeometryError};

/// What `evolve` does when a component has a zero-length edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Stop at the failing tick; that tick is not applied to any component.
    #[default]
    Abort,
    /// Leave the failing component as it is for that tick and step the others.
    SkipComponent,
}

/// Flow driver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowCfg {
    /// Explicit Euler time step.
    pub delta_t: f64,
    /// Number of ticks `evolve` runs.
    pub steps: usize,
    pub on_degenerate: DegeneratePolicy,
}

impl Default for FlowCfg {
    fn default() -> Self {
        Self {
            delta_t: DEFAULT_DELTA_T,
            steps: 1,
            on_degenerate: DegeneratePolicy::Abort,
        }
    }
}

/// A component left unchanged during one tick of `evolve`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkippedStep {
    pub tick: usize,
    pub error: FlowError,
}

/// What `evolve` did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvolveSummary {
    pub ticks: usize,
    pub skipped: Vec<SkippedStep>,
}

/// New vertex positions for one ring, computed entirely from the current snapshot.
pub fn flow_positions(vertices: &[Point2], delta_t: f64) -> Result<Vec<Point2>, GeometryError> {
    let tangents = compute_tangents(vertices)?;
    let normals = compute_normals(&tangents);
    let speeds = vertex_difference_curvatures(vertices);
    Ok(vertices
        .iter()
        .zip(&normals)
        .zip(&speeds)
        .map(|((v, n), k)| v - n * (delta_t * k))
        .collect())
}

/// Advance one component by one step. On error the component is unchanged.
pub fn step_component(component: &mut CurveComponent, delta_t: f64) -> Result<(), GeometryError> {
    let next = flow_positions(component.vertices(), delta_t)?;
    component.replace_vertices(next);
    Ok(())
}

/// Advance every component by one step, all or nothing.
///
/// All new rings are computed before any is swapped in, so on error the
/// collection is exactly as it was.
pub fn step_evolution(collection: &mut CurveCollection, delta_t: f64) -> Result<(), FlowError> {
    let next = collection
        .components
        .iter()
        .enumerate()
        .map(|(component, c)| {
            flow_positions(c.vertices(), delta_t)
                .map_err(|source| FlowError::Degenerate { component, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    for (c, v) in collection.components.iter_mut().zip(next) {
        c.replace_vertices(v);
    }
    Ok(())
}

/// Run `cfg.steps` ticks under `cfg.on_degenerate`.
///
/// With `Abort` the first failing tick is returned as an error and the
/// collection holds the state after the last complete tick.
pub fn evolve(collection: &mut CurveCollection, cfg: FlowCfg) -> Result<EvolveSummary, FlowError> {
    let mut summary = EvolveSummary::default();
    for tick in 0..cfg.steps {
        match cfg.on_degenerate {
            DegeneratePolicy::Abort => step_evolution(collection, cfg.delta_t)?,
            DegeneratePolicy::SkipComponent => {
                for (component, c) in collection.components.iter_mut().enumerate() {
                    if let Err(source) = step_component(c, cfg.delta_t) {
                        tracing::warn!(tick, component, %source, "skipping degenerate component");
                        summary.skipped.push(SkippedStep {
                            tick,
                            error: FlowError::Degenerate { component, source },
                        });
                    }
                }
            }
        }
        summary.ticks += 1;
    }
    tracing::debug!(
        ticks = summary.ticks,
        skipped = summary.skipped.len(),
        "evolve done"
    );
    Ok(summary)
}
