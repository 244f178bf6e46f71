use thiserror::Error;

/// Errors rejected at the public entry points before any mining work starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Support threshold must be a positive transaction count.
    #[error("support threshold must be at least 1")]
    InvalidSupport,
    /// Confidence threshold must lie in `(0, 1]`.
    #[error("confidence threshold must be in (0, 1], got {0}")]
    InvalidConfidence(f64),
}
