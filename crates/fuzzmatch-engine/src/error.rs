//! Request-level errors for the matching engine.

use thiserror::Error;

/// Errors that reject a whole matching request.
///
/// Recoverable problems (unknown algorithm ids, single pairs that fail to
/// score) never surface here; they are reported as warnings on the outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Every source value was blank.
    #[error("invalid input: no non-blank source values to match")]
    EmptySource,

    /// Every target value was blank.
    #[error("invalid input: no non-blank target values to match")]
    EmptyTarget,

    #[error("invalid input: threshold must be a number, got {0}")]
    InvalidThreshold(f64),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
