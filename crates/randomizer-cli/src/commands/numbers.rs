use randomizer_core::number;
use serde_json::json;

use super::emit;

pub fn run_int(min: Option<i64>, max: Option<i64>, count: usize, json: bool) {
    for _ in 0..count {
        let v = match (min, max) {
            (Some(lo), Some(hi)) => number::int_interval(lo, hi),
            _ => number::int::<i64>(),
        };
        emit(json!(v), json);
    }
}

pub fn run_uint(min: Option<u64>, max: Option<u64>, count: usize, json: bool) {
    for _ in 0..count {
        let v = match (min, max) {
            (Some(lo), Some(hi)) => number::uint_interval(lo, hi),
            _ => number::uint::<u64>(),
        };
        emit(json!(v), json);
    }
}

pub fn run_float(bits: &str, count: usize, json: bool) {
    for _ in 0..count {
        match bits {
            "32" => emit(json!(number::float32()), json),
            _ => emit(json!(number::float64()), json),
        }
    }
}
