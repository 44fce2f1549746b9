use randomizer_core::{Alphabet, HashPool, WordRng, word};
use randomizer_tests::{TestResult, run_all, symbol_uniformity};

/// Generate fresh output from every stream the library exposes and run the
/// statistical battery over it.
pub fn run(samples: usize) {
    println!("Generating {samples} bytes per stream...\n");

    let mut results: Vec<(String, Vec<TestResult>)> = Vec::new();

    let mut buf = vec![0u8; samples];
    WordRng::new().fill(&mut buf);
    results.push(("word rng".to_string(), run_all(&buf)));

    let pool = HashPool::new(4);
    let mut buf = Vec::with_capacity(samples);
    while buf.len() < samples {
        pool.sum(&mut buf);
    }
    buf.truncate(samples);
    results.push(("pool counter".to_string(), run_all(&buf)));

    for alphabet in [Alphabet::Decimal, Alphabet::HexLower, Alphabet::Octal] {
        let data = word::bytes(alphabet, samples);
        results.push((
            format!("word {alphabet}"),
            vec![symbol_uniformity(&data, alphabet.symbols())],
        ));
    }

    println!("{:<14} {:<20} {:>10} {:>6} {:>6}", "Stream", "Test", "p-value", "Pass", "Grade");
    println!("{}", "-".repeat(60));
    let mut failures = 0;
    for (stream, tests) in &results {
        for t in tests {
            if !t.passed {
                failures += 1;
            }
            let p = t
                .p_value
                .map_or_else(|| "-".to_string(), |p| format!("{p:.4}"));
            let ok = if t.passed { "✓" } else { "✗" };
            println!("{stream:<14} {:<20} {p:>10} {ok:>6} {:>6}", t.name, t.grade);
        }
    }

    println!();
    if failures == 0 {
        println!("All tests passed.");
    } else {
        println!("{failures} test(s) failed. A healthy generator fails ~1% of runs per test.");
    }
}
