//! Time mesh construction for a few fixed obstacle layouts.
//!
//! Usage:
//!   cargo run -p meshgen --example timing
//!   RUST_LOG=meshgen=debug cargo run -p meshgen --example timing
//!
//! Prints point count, edge count, completion passes and elapsed time per layout.

use std::time::Instant;

use meshgen::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let layouts: [(&str, Vec<Point>, u8); 3] = [
        ("single hexagon", vec![Point::new(0.6, 0.8)], 6),
        (
            "three hexagons",
            vec![
                Point::new(0.6, 0.8),
                Point::new(0.5, 0.5),
                Point::new(0.7, 0.4),
            ],
            6,
        ),
        (
            "four decagons",
            vec![
                Point::new(0.5, 0.5),
                Point::new(0.3, 0.25),
                Point::new(0.8, 0.8),
                Point::new(0.2, 0.85),
            ],
            10,
        ),
    ];
    for (name, centers, k) in layouts {
        let start = Instant::now();
        match generate_mesh(&centers, 0.1, k) {
            Ok(mesh) => println!(
                "{name}: points={} edges={} passes={} open={} elapsed={:.3}ms",
                mesh.graph.num_points(),
                mesh.graph.num_edges(),
                mesh.completion.passes,
                mesh.open_edges.len(),
                start.elapsed().as_secs_f64() * 1e3
            ),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
