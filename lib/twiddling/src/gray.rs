//! # gray.rs
//!
//! Gray code conversion on magnitudes.
//!
//! Both directions discard the sign of their input. Outputs are always
//! non-negative, and `from_gray_code(to_gray_code(v)) == |v|`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/10/2026

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

/// Encodes `|value|` as `v ^ (v >> 1)`.
///
/// # Examples
///
/// ```
/// use twiddling::{to_gray_code, BigInt};
///
/// assert_eq!(to_gray_code(&BigInt::from(5)), BigInt::from(7));
/// ```
pub fn to_gray_code(value: &BigInt) -> BigInt {
    let v = value.magnitude();
    BigInt::from(v ^ (v >> 1u32))
}

/// Decodes a Gray code back to binary, reading `|value|`.
pub fn from_gray_code(value: &BigInt) -> BigInt {
    let mut result: BigUint = value.magnitude().clone();
    let mut shifted = &result >> 1u32;

    while !shifted.is_zero() {                                                  /* Prefix XOR of all right shifts     */
        result ^= &shifted;
        shifted >>= 1u32;
    }

    BigInt::from(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_to_gray_code() {
        let expected = [0, 1, 3, 2, 6, 7, 5, 4];
        for (i, gray) in expected.iter().enumerate() {
            assert_eq!(to_gray_code(&big(i as i64)), big(*gray));
        }
    }

    #[test]
    fn test_from_gray_code() {
        assert_eq!(from_gray_code(&big(0)), big(0));
        assert_eq!(from_gray_code(&big(7)), big(5));
        assert_eq!(from_gray_code(&big(4)), big(7));
    }

    #[test]
    fn test_sign_discarded() {
        assert_eq!(to_gray_code(&big(-5)), big(7));
        assert_eq!(from_gray_code(&big(-7)), big(5));
    }

    #[test]
    fn test_consecutive_codes_differ_by_one_bit() {
        for i in 0..256i64 {
            let a = to_gray_code(&big(i));
            let b = to_gray_code(&big(i + 1));
            assert_eq!((a ^ b).magnitude().count_ones(), 1, "at {i}");
        }
    }
}
