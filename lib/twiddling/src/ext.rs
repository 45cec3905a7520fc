//! # ext.rs
//!
//! Method-call sugar for the free functions, e.g. `value.with_bit_set(3)?`.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/10/2026

use num_bigint::BigInt;

use crate::{bits, count, error::Result, gray};

/// Extension methods on `BigInt`.
///
/// Names differ from the free functions where `BigInt` already has an
/// inherent method of the same name (`bit`, `set_bit`), since inherent
/// methods win method resolution.
pub trait Twiddle {
    fn bits_set(&self) -> u64;
    fn with_bit_set(&self, index: i64) -> Result<BigInt>;
    fn with_bit_cleared(&self, index: i64) -> Result<BigInt>;
    fn with_bit(&self, index: i64, bit: bool) -> Result<BigInt>;
    fn bit_at(&self, index: i64) -> Result<bool>;
    fn hamming_distance_to(&self, other: &BigInt) -> u64;
    fn to_gray_code(&self) -> BigInt;
    fn from_gray_code(&self) -> BigInt;
    fn lsb(&self) -> Option<u64>;
    fn msb(&self) -> Option<u64>;
}

impl Twiddle for BigInt {
    fn bits_set(&self) -> u64 {
        count::count_bits(self)
    }

    fn with_bit_set(&self, index: i64) -> Result<BigInt> {
        bits::set_bit(self, index)
    }

    fn with_bit_cleared(&self, index: i64) -> Result<BigInt> {
        bits::clear_bit(self, index)
    }

    fn with_bit(&self, index: i64, bit: bool) -> Result<BigInt> {
        bits::assign_bit(self, index, bit)
    }

    fn bit_at(&self, index: i64) -> Result<bool> {
        bits::get_bit(self, index)
    }

    fn hamming_distance_to(&self, other: &BigInt) -> u64 {
        count::hamming_distance(self, other)
    }

    fn to_gray_code(&self) -> BigInt {
        gray::to_gray_code(self)
    }

    fn from_gray_code(&self) -> BigInt {
        gray::from_gray_code(self)
    }

    fn lsb(&self) -> Option<u64> {
        count::lsb(self)
    }

    fn msb(&self) -> Option<u64> {
        count::msb(self)
    }
}
