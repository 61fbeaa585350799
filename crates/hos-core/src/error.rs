//! Core error type.
//!
//! Downstream crates wrap `HosError` as one variant of their own enum via a
//! `#[from]` conversion rather than re-declaring configuration failures.

use thiserror::Error;

use crate::Span;

/// The error type for `hos-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HosError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("time out of range: {0} after start")]
    TimeOutOfRange(Span),
}

/// Shorthand result type for `hos-core`.
pub type HosResult<T> = Result<T, HosError>;
