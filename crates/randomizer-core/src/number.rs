//! Integer and float convenience draws over the default pool.
//!
//! Width genericity follows the original surface: any fixed-width signed or
//! unsigned integer type works, with truncation semantics (low bits of a
//! 64-bit draw) at the boundary. Interval draws route through the unbiased
//! sampler in [`crate::rng`]; full-range draws take the pool's counter path
//! directly.

use crate::rng::{WordRng, uniform_u64};

/// Signed integer widths usable with [`int`] and [`int_interval`].
///
/// Conversions are truncating on the way out of the 64-bit sampling domain
/// and sign-extending on the way in, matching two's-complement casts.
pub trait SignedInteger: Copy + PartialOrd {
    /// Truncate a 64-bit value to this width.
    fn from_i64(v: i64) -> Self;
    /// Sign-extend to 64 bits.
    fn into_i64(self) -> i64;
}

/// Unsigned integer widths usable with [`uint`] and [`uint_interval`].
pub trait UnsignedInteger: Copy + PartialOrd {
    /// Truncate a 64-bit value to this width.
    fn from_u64(v: u64) -> Self;
    /// Zero-extend to 64 bits.
    fn into_u64(self) -> u64;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {$(
        impl SignedInteger for $t {
            fn from_i64(v: i64) -> Self {
                v as $t
            }
            fn into_i64(self) -> i64 {
                self as i64
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {$(
        impl UnsignedInteger for $t {
            fn from_u64(v: u64) -> Self {
                v as $t
            }
            fn into_u64(self) -> u64 {
                self as u64
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

const SIGN_BIT: u64 = 1 << 63;

/// Full-range signed integer of width `T` (low bits of a 64-bit pool draw).
pub fn int<T: SignedInteger>() -> T {
    T::from_i64(crate::default_pool().sum64() as i64)
}

/// Full-range unsigned integer of width `T` (low bits of a 64-bit pool draw).
pub fn uint<T: UnsignedInteger>() -> T {
    T::from_u64(crate::default_pool().sum64())
}

/// Uniform signed integer in `[min, max)`.
///
/// Equal bounds return the bound itself. Swapped bounds are normalized
/// first: `int_interval(hi, lo)` behaves exactly like `int_interval(lo, hi)`
/// rather than producing an empty range.
///
/// Both bounds are mapped into the unsigned domain through a sign-bit XOR —
/// a monotonic bijection — so the span arithmetic wraps correctly at the
/// domain extremes.
pub fn int_interval<T: SignedInteger>(min: T, max: T) -> T {
    let (mut lo, mut hi) = (min.into_i64(), max.into_i64());
    if lo == hi {
        return min;
    }
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    let lo_u = (lo as u64) ^ SIGN_BIT;
    let hi_u = (hi as u64) ^ SIGN_BIT;
    let mut rng = WordRng::new();
    let v = uniform_u64(hi_u - lo_u, &mut rng);
    T::from_i64(((lo_u + v) ^ SIGN_BIT) as i64)
}

/// Uniform unsigned integer in `[min, max)`.
///
/// Equal bounds return the bound; swapped bounds are normalized, as with
/// [`int_interval`].
pub fn uint_interval<T: UnsignedInteger>(min: T, max: T) -> T {
    let (mut lo, mut hi) = (min.into_u64(), max.into_u64());
    if lo == hi {
        return min;
    }
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    let mut rng = WordRng::new();
    T::from_u64(lo + uniform_u64(hi - lo, &mut rng))
}

/// Uniform `f32` in `[0, 1)`: top 24 bits of a 32-bit draw, scaled by 2^-24.
pub fn float32() -> f32 {
    const INV_24: f32 = 1.0 / (1u32 << 24) as f32;
    (crate::default_pool().sum32() >> 8) as f32 * INV_24
}

/// Uniform `f64` in `[0, 1)`: top 53 bits of a 64-bit draw, scaled by 2^-53.
pub fn float64() -> f64 {
    const INV_53: f64 = 1.0 / (1u64 << 53) as f64;
    (crate::default_pool().sum64() >> 11) as f64 * INV_53
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Floats
    // -----------------------------------------------------------------------

    #[test]
    fn test_float_ranges() {
        for _ in 0..10_000 {
            let f32v = float32();
            assert!((0.0..1.0).contains(&f32v), "float32 out of [0,1): {f32v}");
            let f64v = float64();
            assert!((0.0..1.0).contains(&f64v), "float64 out of [0,1): {f64v}");
        }
    }

    #[test]
    fn test_float_draws_vary() {
        let first = float64();
        assert!((0..1024).any(|_| float64() != first));
    }

    // -----------------------------------------------------------------------
    // Full-range draws
    // -----------------------------------------------------------------------

    #[test]
    fn test_int_draws_vary() {
        let first: i64 = int();
        assert!((0..1024).any(|_| int::<i64>() != first));
    }

    #[test]
    fn test_uint_draws_vary() {
        let first: u64 = uint();
        assert!((0..1024).any(|_| uint::<u64>() != first));
    }

    #[test]
    fn test_narrow_widths_compile_and_draw() {
        let _: i8 = int();
        let _: i16 = int();
        let _: i32 = int();
        let _: isize = int();
        let _: u8 = uint();
        let _: u16 = uint();
        let _: u32 = uint();
        let _: usize = uint();
    }

    // -----------------------------------------------------------------------
    // Signed intervals
    // -----------------------------------------------------------------------

    #[test]
    fn test_int_interval_range() {
        for _ in 0..10_000 {
            let v = int_interval(-1000i64, 1000i64);
            assert!((-1000..1000).contains(&v), "out of [-1000,1000): {v}");
        }
    }

    #[test]
    fn test_int_interval_swapped_bounds() {
        for _ in 0..10_000 {
            let v = int_interval(1000i64, -1000i64);
            assert!((-1000..1000).contains(&v), "out of [-1000,1000): {v}");
        }
    }

    #[test]
    fn test_int_interval_equal_bounds() {
        assert_eq!(int_interval(42i64, 42i64), 42);
        assert_eq!(int_interval(i64::MIN, i64::MIN), i64::MIN);
    }

    #[test]
    fn test_int_interval_full_domain() {
        // Span of nearly 2^64; exercises the sign-bit wraparound mapping.
        for _ in 0..1000 {
            let v = int_interval(i64::MIN, i64::MAX);
            assert!(v < i64::MAX);
        }
    }

    #[test]
    fn test_int_interval_narrow_width() {
        for _ in 0..1000 {
            let v = int_interval(-5i8, 5i8);
            assert!((-5..5).contains(&v));
        }
    }

    #[test]
    fn test_int_interval_adjacent_bounds() {
        for _ in 0..100 {
            assert_eq!(int_interval(7i32, 8i32), 7);
        }
    }

    // -----------------------------------------------------------------------
    // Unsigned intervals
    // -----------------------------------------------------------------------

    #[test]
    fn test_uint_interval_range() {
        for _ in 0..10_000 {
            let v = uint_interval(10u64, 100_000u64);
            assert!((10..100_000).contains(&v), "out of [10,100000): {v}");
        }
    }

    #[test]
    fn test_uint_interval_swapped_bounds() {
        for _ in 0..10_000 {
            let v = uint_interval(100_000u64, 10u64);
            assert!((10..100_000).contains(&v), "out of [10,100000): {v}");
        }
    }

    #[test]
    fn test_uint_interval_equal_bounds() {
        assert_eq!(uint_interval(7u64, 7u64), 7);
        assert_eq!(uint_interval(u64::MAX, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_uint_interval_full_domain() {
        for _ in 0..1000 {
            let v = uint_interval(0u64, u64::MAX);
            assert!(v < u64::MAX);
        }
    }

    #[test]
    fn test_uint_interval_narrow_width() {
        for _ in 0..1000 {
            let v = uint_interval(3u8, 9u8);
            assert!((3..9).contains(&v));
        }
    }
}
