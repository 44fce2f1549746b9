//! Statistical test battery for randomizer output.
//!
//! A small NIST SP 800-22 inspired set of checks for the byte and symbol
//! streams the library produces. Each test returns a [`TestResult`] with a
//! p-value (where applicable), a pass/fail determination, and a letter grade
//! (A through F). These are distribution tests, not proofs: a healthy
//! generator fails any given test about 1% of the time at the default
//! threshold.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use statrs::function::erf::erfc;

/// Result of a single randomness test.
#[derive(Debug, Clone)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub p_value: Option<f64>,
    pub statistic: f64,
    pub details: String,
    pub grade: char,
}

impl TestResult {
    /// Assign a letter grade based on p-value.
    ///
    /// - A: p >= 0.1
    /// - B: p >= 0.01
    /// - C: p >= 0.001
    /// - D: p >= 0.0001
    /// - F: otherwise or None
    pub fn grade_from_p(p: Option<f64>) -> char {
        match p {
            Some(p) if p >= 0.1 => 'A',
            Some(p) if p >= 0.01 => 'B',
            Some(p) if p >= 0.001 => 'C',
            Some(p) if p >= 0.0001 => 'D',
            _ => 'F',
        }
    }

    /// Determine pass/fail from p-value against a threshold (default 0.01).
    pub fn pass_from_p(p: Option<f64>, threshold: f64) -> bool {
        match p {
            Some(p) => p >= threshold,
            None => false,
        }
    }
}

/// Unpack a byte slice into individual bits (MSB first per byte).
fn to_bits(data: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(data.len() * 8);
    for &byte in data {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Return a failing `TestResult` when data is too short.
fn insufficient(name: &str, needed: usize, got: usize) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed: false,
        p_value: None,
        statistic: 0.0,
        details: format!("Insufficient data: need {needed}, got {got}"),
        grade: 'F',
    }
}

/// Monobit frequency — proportion of 1s vs 0s should be ~50%.
pub fn monobit_frequency(data: &[u8]) -> TestResult {
    let name = "Monobit Frequency";
    let bits = to_bits(data);
    let n = bits.len();
    if n < 100 {
        return insufficient(name, 100, n);
    }
    let s: i64 = bits
        .iter()
        .map(|&b| if b == 1 { 1i64 } else { -1i64 })
        .sum();
    let s_obs = (s as f64).abs() / (n as f64).sqrt();
    let p = erfc(s_obs / 2.0_f64.sqrt());
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: s_obs,
        details: format!("S={s}, n={n}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

/// Byte uniformity — chi-squared on the byte value distribution (256 bins).
pub fn byte_uniformity(data: &[u8]) -> TestResult {
    let name = "Byte Uniformity";
    let n = data.len();
    if n < 1280 {
        return insufficient(name, 1280, n);
    }
    let mut hist = [0u64; 256];
    for &b in data {
        hist[b as usize] += 1;
    }
    let expected = n as f64 / 256.0;
    let chi2: f64 = hist
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let dist = ChiSquared::new(255.0).unwrap();
    let p = dist.sf(chi2);
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: chi2,
        details: format!("n={n}, expected_per_bin={expected:.1}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

/// Symbol uniformity — chi-squared over a fixed symbol table.
///
/// For alphabet-constrained sequences the 256-bin byte test is meaningless;
/// this variant bins only over `symbols`. Adjacent-duplicate suppression
/// does not disturb the marginal distribution (each position is uniform over
/// the table), so uniform expectations still apply. Any byte outside the
/// table fails the test outright.
pub fn symbol_uniformity(data: &[u8], symbols: &[u8]) -> TestResult {
    let name = "Symbol Uniformity";
    let k = symbols.len();
    let n = data.len();
    if k < 2 {
        return insufficient(name, 2, k);
    }
    if n < k * 20 {
        return insufficient(name, k * 20, n);
    }
    let mut hist = vec![0u64; k];
    for &b in data {
        match symbols.iter().position(|&s| s == b) {
            Some(i) => hist[i] += 1,
            None => {
                return TestResult {
                    name: name.to_string(),
                    passed: false,
                    p_value: None,
                    statistic: 0.0,
                    details: format!("byte 0x{b:02x} outside the symbol table"),
                    grade: 'F',
                };
            }
        }
    }
    let expected = n as f64 / k as f64;
    let chi2: f64 = hist
        .iter()
        .map(|&c| {
            let diff = c as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let dist = ChiSquared::new((k - 1) as f64).unwrap();
    let p = dist.sf(chi2);
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: chi2,
        details: format!("n={n}, k={k}, expected_per_bin={expected:.1}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

/// Runs test — number of uninterrupted runs of 0s or 1s.
pub fn runs_test(data: &[u8]) -> TestResult {
    let name = "Runs Test";
    let bits = to_bits(data);
    let n = bits.len();
    if n < 100 {
        return insufficient(name, 100, n);
    }
    let ones: usize = bits.iter().map(|&b| b as usize).sum();
    let prop = ones as f64 / n as f64;
    if (prop - 0.5).abs() >= 2.0 / (n as f64).sqrt() {
        return TestResult {
            name: name.to_string(),
            passed: false,
            p_value: Some(0.0),
            statistic: 0.0,
            details: format!("Pre-test failed: proportion={prop:.4}"),
            grade: 'F',
        };
    }
    let runs = 1 + bits.windows(2).filter(|w| w[0] != w[1]).count();
    let expected = 2.0 * n as f64 * prop * (1.0 - prop) + 1.0;
    let denom = 2.0 * (2.0 * n as f64).sqrt() * prop * (1.0 - prop);
    let z = (runs as f64 - expected).abs() / denom;
    let p = erfc(z / 2.0_f64.sqrt());
    TestResult {
        name: name.to_string(),
        passed: TestResult::pass_from_p(Some(p), 0.01),
        p_value: Some(p),
        statistic: runs as f64,
        details: format!("runs={runs}, expected={expected:.1}"),
        grade: TestResult::grade_from_p(Some(p)),
    }
}

/// Run the full byte-stream battery.
pub fn run_all(data: &[u8]) -> Vec<TestResult> {
    vec![
        monobit_frequency(data),
        byte_uniformity(data),
        runs_test(data),
    ]
}
