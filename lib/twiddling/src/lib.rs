//! # lib.rs
//!
//! Bit twiddling over arbitrary-precision signed integers.
//!
//! This crate collects small stateless operations on `BigInt` values:
//! counting set bits, setting, clearing and querying a single bit, Hamming
//! distance, and Gray code conversion. Every operation takes its input by
//! reference and returns a fresh value.
//!
//! Two families of semantics live side by side. The single-bit accessors
//! (`set_bit`, `clear_bit`, `assign_bit`, `get_bit`) work on the infinite
//! two's-complement representation of the value, so on negative inputs they
//! see an endless run of leading ones and may flip the sign. Everything else
//! (`count_bits`, `hamming_distance`, `lsb`, `msb` and the Gray code pair)
//! looks only at the magnitude `|value|` and treats sign separately, if at
//! all. The two views are not reconciled, and callers mixing them on
//! negative values should expect them to disagree.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/10/2026

pub mod bits;
pub mod count;
pub mod error;
pub mod ext;
pub mod gray;

pub use bits::{assign_bit, clear_bit, get_bit, set_bit};
pub use count::{count_bits, hamming_distance, lsb, msb};
pub use error::{Error, Result};
pub use ext::Twiddle;
pub use gray::{from_gray_code, to_gray_code};

pub use num_bigint::BigInt;
