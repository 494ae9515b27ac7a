//! Error types for ContourEQ

use thiserror::Error;

/// Core error type
///
/// User-input edge cases are handled by clamping and never surface here;
/// this covers genuine faults at the engine and host seams only.
#[derive(Error, Debug)]
pub enum CqError {
    #[error("Engine error: {0}")]
    Engine(String),

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Result type alias
pub type CqResult<T> = Result<T, CqError>;
