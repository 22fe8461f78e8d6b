//! Error taxonomy for subnet calculations.
//!
//! Both variants are collapsed into a single invalid-input signal by
//! [`crate::calculate`]; [`crate::try_calculate`] keeps them apart for callers
//! that want to tell the user what was wrong.

use thiserror::Error;

/// Why a CIDR expression was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    /// Input does not look like `a.b.c.d/p`.
    #[error("Invalid CIDR format: '{input}' (expected e.g. 192.168.1.0/24)")]
    Format { input: String },

    /// An octet or the prefix is numerically out of range.
    #[error("{field} value {value} is out of range 0-{max}")]
    Range {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

pub type Result<T> = std::result::Result<T, SubnetError>;
