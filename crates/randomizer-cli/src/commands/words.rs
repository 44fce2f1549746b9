use randomizer_core::{Alphabet, word};
use serde_json::json;

use super::emit;

pub fn run(alphabet: &str, length: usize, upper: bool, count: usize, json: bool) {
    let alphabet = match alphabet {
        "decimal" => Alphabet::Decimal,
        "octal" => Alphabet::Octal,
        _ if upper => Alphabet::HexUpper,
        _ => Alphabet::HexLower,
    };
    log::debug!("generating {count} word(s): alphabet={alphabet}, length={length}");
    for _ in 0..count {
        emit(json!(word::string(alphabet, length)), json);
    }
}
