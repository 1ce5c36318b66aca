use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use almanac::{resolve, Almanac, ResolverConfig};

/// Random almanac with values past the 32-bit range.
fn generate(rng: &mut StdRng, seeds: usize, stages: usize, rules: usize) -> String {
    let mut text = String::from("seeds:");
    for _ in 0..seeds {
        text.push_str(&format!(" {}", rng.gen_range(0i64..8_000_000_000)));
    }
    text.push('\n');
    for stage in 0..stages {
        text.push_str(&format!("\nstage-{stage} map:\n"));
        for _ in 0..rules {
            let dest = rng.gen_range(0i64..8_000_000_000);
            let src = rng.gen_range(0i64..8_000_000_000);
            let len = rng.gen_range(1i64..500_000_000);
            text.push_str(&format!("{dest} {src} {len}\n"));
        }
    }
    text
}

#[test]
fn wide_values_match_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..8 {
        let text = generate(&mut rng, 20, 7, 30);
        let expected = Almanac::parse(&text).unwrap().locations().unwrap();
        let fast = resolve(text.as_bytes(), &ResolverConfig::default()).unwrap();
        let slow = resolve(
            text.as_bytes(),
            &ResolverConfig {
                short_circuit: false,
                ..ResolverConfig::default()
            },
        )
        .unwrap();
        assert_eq!(fast.locations, expected);
        assert_eq!(slow.locations, expected);
    }
}

#[test]
#[ignore]
fn large_almanac_perf() {
    let mut rng = StdRng::seed_from_u64(7);
    let text = generate(&mut rng, 1_000, 7, 100_000);

    for short_circuit in [true, false] {
        let config = ResolverConfig {
            short_circuit,
            ..ResolverConfig::default()
        };
        let start = Instant::now();
        let res = resolve(text.as_bytes(), &config).unwrap();
        println!(
            "short_circuit={short_circuit}: min={} time={:.2?} applied={} skipped={}",
            res.min_location().unwrap(),
            start.elapsed(),
            res.stats.rules_applied,
            res.stats.rules_skipped
        );
    }
}
