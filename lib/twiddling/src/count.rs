//! # count.rs
//!
//! Magnitude-based bit counting.
//!
//! Everything here reads `|value|` and ignores the two's-complement view
//! entirely. Hamming distance models the sign as one extra conceptual bit
//! in front of the magnitude, so `5` and `-5` are at distance one.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/10/2026

use num_bigint::BigInt;
use num_traits::Signed;

/// Number of set bits in `|value|`. `count_bits(-7) == count_bits(7) == 3`.
pub fn count_bits(value: &BigInt) -> u64 {
    value.magnitude().count_ones()
}

/// Number of differing bits between `left` and `right`.
///
/// Counts one for a sign mismatch plus the popcount of the XOR of the two
/// magnitudes. Zero is non-negative.
///
/// # Examples
///
/// ```
/// use twiddling::{hamming_distance, BigInt};
///
/// assert_eq!(hamming_distance(&BigInt::from(5), &BigInt::from(1)), 1);
/// assert_eq!(hamming_distance(&BigInt::from(5), &BigInt::from(-5)), 1);
/// ```
pub fn hamming_distance(left: &BigInt, right: &BigInt) -> u64 {
    let sign = u64::from(left.is_negative() != right.is_negative());
    sign + (left.magnitude() ^ right.magnitude()).count_ones()
}

/// Index of the lowest set bit of `|value|`, or `None` for zero.
pub fn lsb(value: &BigInt) -> Option<u64> {
    value.magnitude().trailing_zeros()
}

/// Index of the highest set bit of `|value|`, or `None` for zero.
pub fn msb(value: &BigInt) -> Option<u64> {
    value.magnitude().bits().checked_sub(1)
}
