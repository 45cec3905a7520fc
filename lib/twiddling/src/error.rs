//! # error.rs
//!
//! Error type shared by the index-taking operations.
//!
//! # Author
//! Alden Luthfi
//!
//! # Date
//! 15/10/2026

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A bit index below zero was passed to a single-bit operation.
    #[error("bit index {index} is out of range")]
    IndexOutOfRange { index: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_index() {
        let err = Error::IndexOutOfRange { index: -3 };
        assert_eq!(err.to_string(), "bit index -3 is out of range");
    }
}
