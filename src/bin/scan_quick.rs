// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

// Quick single-run timings for scanning and comparison, for development
// iteration. Run with `--features bench`.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use sliver::Criteria;
use sliver::compare;
use sliver::scan;

fn time_ops<F: Fn() -> usize>(f: F, iterations: u32) -> f64 {
    // Warmup
    for _ in 0..3 {
        let _ = f();
    }

    let start = Instant::now();
    let mut sink = 0;
    for _ in 0..iterations {
        sink ^= f();
    }
    let elapsed = start.elapsed();
    std::hint::black_box(sink);
    return elapsed.as_nanos() as f64 / iterations as f64;
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let len = 100_000;
    let text: Vec<u8> = (0..len).map(|_| rng.gen_range(b'a'..=b'z')).collect();
    let mut other = text.clone();
    other[len - 1] = b'#';

    let vowels = b"aeiou";
    let upper: Vec<u8> = (b'A'..=b'Z').collect();
    let is_digit = |u: u8| u.is_ascii_digit();
    let iterations = 200;

    println!("Text length: {} units", len);

    println!("\n=== scan ===");
    let unit = time_ops(|| scan::index(&text[..], b'#', ..).ok().flatten().unwrap_or(0), iterations);
    println!("  index unit:        {:>10.0} ns", unit);
    let small = time_ops(|| scan::count(&text[..], vowels, ..).unwrap_or(0), iterations);
    println!("  count small set:   {:>10.0} ns", small);
    let large = time_ops(|| scan::index(&text[..], &upper, ..).ok().flatten().unwrap_or(0), iterations);
    println!("  index large set:   {:>10.0} ns", large);
    let predicate = time_ops(
        || scan::index_right(&text[..], Criteria::Predicate(&is_digit), ..).ok().flatten().unwrap_or(0),
        iterations,
    );
    println!("  index_right pred:  {:>10.0} ns", predicate);

    println!("\n=== compare ===");
    let exact = time_ops(|| compare::compare(&text[..], &other[..], .., ..).map_or(0, |c| c.index()), iterations);
    println!("  compare:           {:>10.0} ns", exact);
    let folded = time_ops(|| compare::compare_ci(&text[..], &other[..], .., ..).map_or(0, |c| c.index()), iterations);
    println!("  compare_ci:        {:>10.0} ns", folded);
    let relation = time_ops(|| compare::lt(&text[..], &other[..], .., ..).ok().flatten().unwrap_or(0), iterations);
    println!("  lt:                {:>10.0} ns", relation);
}
