//! Error type for tree construction.

use thiserror::Error;

/// The only checked failure in the pipeline.
///
/// Everything else (missing parent state during traversal, absent root) is an
/// invariant violation and panics instead of surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A starting number below 1 was submitted for insertion.
    #[error("starting number must be a positive integer, got {0}")]
    InvalidInput(i64),
}
