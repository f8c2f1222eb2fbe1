//! Random star-shaped rings (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic, indexable sample rings for property tests, benchmarks and
//!   the CLI `sample` command. Every ring has pairwise-distinct consecutive
//!   vertices, so the flow step never hits a degenerate edge on a fresh draw.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, keep the angular order (star-shaped around the origin).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cfg::MIN_RADIUS;
use crate::curve::{CurveCollection, CurveComponent, Point2};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius before jitter.
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    /// Emit vertices clockwise (the flow then moves them inward).
    pub clockwise: bool,
}
impl Default for RingCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 6, max: 24 },
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            clockwise: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one star-shaped ring centred at the origin.
pub fn draw_ring_radial(cfg: RingCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(MIN_RADIUS);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    // Jitter stays below Δ/2 on each side, so angles remain strictly increasing.
    let mut ring: Vec<Point2> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = ((1.0 + u) * r0).max(MIN_RADIUS);
            Point2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    if cfg.clockwise {
        ring.reverse();
    }
    ring
}

/// `count` rings from one seed, translated along x so they do not overlap.
pub fn draw_collection(cfg: RingCfg, count: usize, seed: u64) -> CurveCollection {
    let r_max = cfg.base_radius.max(MIN_RADIUS) * (1.0 + cfg.radial_jitter.clamp(0.0, 0.99));
    (0..count)
        .map(|i| {
            let offset = Point2::new(3.0 * r_max * i as f64, 0.0);
            let ring = draw_ring_radial(
                cfg,
                ReplayToken {
                    seed,
                    index: i as u64,
                },
            );
            CurveComponent::new(ring.into_iter().map(|p| p + offset).collect())
        })
        .collect()
}
