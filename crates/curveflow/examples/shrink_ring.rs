//! Evolve a random clockwise ring and print perimeter/area per tick.
//!
//! Usage:
//!   cargo run -p curveflow --example shrink_ring -- [ticks] [seed]

use curveflow::api::{
    draw_collection, perimeter, signed_area, step_evolution, RingCfg, VertexCount,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let ticks: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = RingCfg {
        vertex_count: VertexCount::Fixed(32),
        clockwise: true,
        ..RingCfg::default()
    };
    let mut col = draw_collection(cfg, 1, seed);
    for tick in 0..=ticks {
        let ring = col.components[0].vertices();
        println!(
            "tick {tick:>3}: perimeter={:.6} area={:.6}",
            perimeter(ring),
            signed_area(ring).abs()
        );
        if tick < ticks {
            if let Err(e) = step_evolution(&mut col, 0.01) {
                eprintln!("stopped: {e}");
                break;
            }
        }
    }
}
