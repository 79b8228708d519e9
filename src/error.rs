//! Construction-time configuration errors.

/// Rejected construction parameters.
///
/// Runtime contract violations (out-of-range indices, a bucket hasher that
/// answers outside `[0, bucket_count)`) are not represented here; those
/// panic at the call site.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Elements must occupy at least one byte.
    #[error("element size must be greater than zero")]
    ZeroElementSize,

    /// A hash set needs at least one bucket.
    #[error("bucket count must be greater than zero")]
    ZeroBuckets,

    /// Growth factors must be finite and strictly greater than one.
    #[error("growth factor must be finite and greater than 1.0, got {0}")]
    InvalidGrowthFactor(f32),
}
