//! # bits.rs
//!
//! Single-bit accessors over `BigInt`.
//!
//! These operate on the native bitwise view of the value, which for negative
//! numbers is an infinite two's-complement string with a run of leading ones.
//! Setting or clearing a bit therefore can change the sign, e.g. clearing
//! bit 0 of `-1` yields `-2`. Indices are signed so that a negative index is
//! reported as an error instead of being unrepresentable.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/10/2026

use num_bigint::BigInt;
use tracing::trace;

use crate::error::{Error, Result};

fn position(index: i64) -> Result<u64> {
    u64::try_from(index).map_err(|_| {
        trace!(index, "rejecting negative bit index");
        Error::IndexOutOfRange { index }
    })
}

/// Returns a copy of `value` with bit `index` set to one.
///
/// # Examples
///
/// ```
/// use twiddling::{set_bit, BigInt};
///
/// assert_eq!(set_bit(&BigInt::from(0), 3).unwrap(), BigInt::from(8));
/// ```
pub fn set_bit(value: &BigInt, index: i64) -> Result<BigInt> {
    let position = position(index)?;
    let mut result = value.clone();
    result.set_bit(position, true);
    Ok(result)
}

/// Returns a copy of `value` with bit `index` cleared, whatever its prior
/// state.
///
/// # Examples
///
/// ```
/// use twiddling::{clear_bit, BigInt};
///
/// assert_eq!(clear_bit(&BigInt::from(15), 0).unwrap(), BigInt::from(14));
/// ```
pub fn clear_bit(value: &BigInt, index: i64) -> Result<BigInt> {
    let position = position(index)?;
    let mut result = value.clone();
    result.set_bit(position, false);
    Ok(result)
}

/// Sets bit `index` when `bit` is true, clears it otherwise.
pub fn assign_bit(value: &BigInt, index: i64, bit: bool) -> Result<BigInt> {
    if bit {
        set_bit(value, index)
    } else {
        clear_bit(value, index)
    }
}

/// Tests bit `index` of `value`.
pub fn get_bit(value: &BigInt, index: i64) -> Result<bool> {
    let position = position(index)?;
    Ok(value.bit(position))
}
