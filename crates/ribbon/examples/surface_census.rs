//! Per-surface class counts and timing for one degree multiset.
//!
//! Usage: `cargo run --release --example surface_census -- 3 3 2`
//!
//! Prints the number of labeled maps, then the unsensed and sensed class
//! counts per surface, with wall-clock timings for each pass.

use std::time::Instant;

use ribbon::prelude::*;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let spec = if args.is_empty() {
        "3 3".to_string()
    } else {
        args.join(" ")
    };
    let degrees: DegreeMultiset = spec.parse().expect("degrees must be positive integers");

    let t0 = Instant::now();
    let maps = generate_maps(&degrees);
    let gen_ms = t0.elapsed().as_secs_f64() * 1e3;
    println!("degrees={degrees} labeled={} time_ms={gen_ms:.3}", maps.len());

    for equivalence in [Equivalence::Unsensed, Equivalence::Sensed] {
        let t1 = Instant::now();
        let mut census = Census::new(equivalence);
        for m in maps.iter().cloned() {
            census.offer(m);
        }
        let ms = t1.elapsed().as_secs_f64() * 1e3;
        println!("{equivalence} classes={} time_ms={ms:.3}", census.kept());
        for (surface, count) in census.by_surface() {
            println!("  {surface} {count}");
        }
    }
}
