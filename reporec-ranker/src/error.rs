//! Error types for the recommendation pipeline.

/// Errors raised when a recommendation request cannot be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RecommendError {
    /// The requested list length was zero.
    #[error("top_n must be at least 1")]
    InvalidTopN,
    /// The curated quota was zero, which would exclude curated sources
    /// entirely; callers wanting that should filter the pool instead.
    #[error("max_curated must be at least 1")]
    InvalidQuota,
}
