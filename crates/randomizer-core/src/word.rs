//! Fixed-alphabet sequence generation.
//!
//! Sequences are drawn symbol-by-symbol through the unbiased sampler, with
//! one extra invariant on top of uniformity: no two adjacent symbols are ever
//! equal. Duplicates are handled by pure rejection — the colliding draw is
//! discarded and redrawn, with no alternate-index shortcut that would skew
//! the distribution of the replacement symbol.

use crate::rng::{WordRng, uniform_u64};

const DECIMAL: &[u8] = b"0123456789";
const HEX_LOWER: &[u8] = b"0123456789abcdef";
const HEX_UPPER: &[u8] = b"0123456789ABCDEF";
const OCTAL: &[u8] = b"01234567";

/// A fixed symbol table.
///
/// Every variant has at least two symbols, which keeps the
/// no-adjacent-duplicate rejection loop terminating for any length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `0-9`.
    Decimal,
    /// `0-9a-f`.
    HexLower,
    /// `0-9A-F`.
    HexUpper,
    /// `0-7`.
    Octal,
}

impl Alphabet {
    /// The symbol table, in index order.
    pub const fn symbols(self) -> &'static [u8] {
        match self {
            Self::Decimal => DECIMAL,
            Self::HexLower => HEX_LOWER,
            Self::HexUpper => HEX_UPPER,
            Self::Octal => OCTAL,
        }
    }

    /// Number of symbols (10, 16, or 8).
    pub const fn size(self) -> usize {
        self.symbols().len()
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal => write!(f, "decimal"),
            Self::HexLower => write!(f, "hex"),
            Self::HexUpper => write!(f, "hex_upper"),
            Self::Octal => write!(f, "octal"),
        }
    }
}

/// Draw `len` symbols with no adjacent duplicates.
fn generate(symbols: &'static [u8], len: usize) -> Vec<u8> {
    if len == 0 {
        return Vec::new();
    }
    let mut rng = WordRng::new();
    let n = symbols.len() as u64;
    let mut out = Vec::with_capacity(len);
    let mut prev = 0u8;
    for i in 0..len {
        let mut c = symbols[uniform_u64(n, &mut rng) as usize];
        while i > 0 && c == prev {
            c = symbols[uniform_u64(n, &mut rng) as usize];
        }
        out.push(c);
        prev = c;
    }
    out
}

/// Random sequence over `alphabet` as raw bytes. Length 0 yields an empty
/// vector.
pub fn bytes(alphabet: Alphabet, len: usize) -> Vec<u8> {
    generate(alphabet.symbols(), len)
}

/// Random sequence over `alphabet` as a string. Length 0 yields `""`.
pub fn string(alphabet: Alphabet, len: usize) -> String {
    bytes(alphabet, len).into_iter().map(char::from).collect()
}

/// Random decimal string of `len` digits.
pub fn decimal(len: usize) -> String {
    string(Alphabet::Decimal, len)
}

/// Random decimal digits as raw bytes.
pub fn decimal_bytes(len: usize) -> Vec<u8> {
    bytes(Alphabet::Decimal, len)
}

/// Random hex string of `len` digits, upper- or lowercase.
pub fn hex(len: usize, uppercase: bool) -> String {
    let alphabet = if uppercase {
        Alphabet::HexUpper
    } else {
        Alphabet::HexLower
    };
    string(alphabet, len)
}

/// Random hex digits as raw bytes.
pub fn hex_bytes(len: usize, uppercase: bool) -> Vec<u8> {
    let alphabet = if uppercase {
        Alphabet::HexUpper
    } else {
        Alphabet::HexLower
    };
    bytes(alphabet, len)
}

/// Random octal string of `len` digits.
pub fn octal(len: usize) -> String {
    string(Alphabet::Octal, len)
}

/// Random octal digits as raw bytes.
pub fn octal_bytes(len: usize) -> Vec<u8> {
    bytes(Alphabet::Octal, len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_adjacent_duplicate(b: &[u8]) -> bool {
        b.windows(2).any(|w| w[0] == w[1])
    }

    fn all_in_alphabet(b: &[u8], symbols: &[u8]) -> bool {
        b.iter().all(|c| symbols.contains(c))
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(decimal(0), "");
        assert_eq!(hex(0, false), "");
        assert_eq!(hex(0, true), "");
        assert_eq!(octal(0), "");
        assert!(decimal_bytes(0).is_empty());
        assert!(hex_bytes(0, false).is_empty());
        assert!(octal_bytes(0).is_empty());
    }

    #[test]
    fn test_length_one() {
        assert_eq!(decimal(1).len(), 1);
        assert_eq!(octal_bytes(1).len(), 1);
    }

    #[test]
    fn test_decimal_output() {
        const N: usize = 4096;
        let s = decimal(N);
        assert_eq!(s.len(), N);
        assert!(all_in_alphabet(s.as_bytes(), DECIMAL));
        assert!(!has_adjacent_duplicate(s.as_bytes()));

        let b = decimal_bytes(N);
        assert_eq!(b.len(), N);
        assert!(all_in_alphabet(&b, DECIMAL));
        assert!(!has_adjacent_duplicate(&b));
    }

    #[test]
    fn test_hex_output() {
        const N: usize = 4096;
        for (uppercase, symbols) in [(false, HEX_LOWER), (true, HEX_UPPER)] {
            let s = hex(N, uppercase);
            assert_eq!(s.len(), N);
            assert!(all_in_alphabet(s.as_bytes(), symbols));
            assert!(!has_adjacent_duplicate(s.as_bytes()));

            let b = hex_bytes(N, uppercase);
            assert_eq!(b.len(), N);
            assert!(all_in_alphabet(&b, symbols));
            assert!(!has_adjacent_duplicate(&b));
        }
    }

    #[test]
    fn test_octal_output() {
        const N: usize = 4096;
        let s = octal(N);
        assert_eq!(s.len(), N);
        assert!(all_in_alphabet(s.as_bytes(), OCTAL));
        assert!(!has_adjacent_duplicate(s.as_bytes()));

        let b = octal_bytes(N);
        assert_eq!(b.len(), N);
        assert!(all_in_alphabet(&b, OCTAL));
        assert!(!has_adjacent_duplicate(&b));
    }

    #[test]
    fn test_string_and_bytes_share_encoding() {
        // Same alphabet and invariants in both forms; bytes are the ASCII
        // encoding of the string symbols.
        let b = bytes(Alphabet::HexUpper, 64);
        assert!(b.is_ascii());
        let s = string(Alphabet::HexUpper, 64);
        assert!(s.bytes().all(|c| HEX_UPPER.contains(&c)));
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(Alphabet::Decimal.size(), 10);
        assert_eq!(Alphabet::HexLower.size(), 16);
        assert_eq!(Alphabet::HexUpper.size(), 16);
        assert_eq!(Alphabet::Octal.size(), 8);
    }

    #[test]
    fn test_every_symbol_reachable() {
        // 4096 octal draws leave a vanishing chance of missing any of the
        // 8 symbols.
        let b = octal_bytes(4096);
        for symbol in OCTAL {
            assert!(b.contains(symbol), "symbol {} never drawn", *symbol as char);
        }
    }
}
