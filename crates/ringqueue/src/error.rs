//! Error types for queue construction.

use thiserror::Error;

/// Reasons a queue could not be constructed.
///
/// Operations on a live queue never return this; they report rejection
/// through their boolean result and the observability counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The requested capacity was zero.
    #[error("queue capacity must be greater than zero")]
    ZeroCapacity,

    /// The requested element size was zero.
    #[error("element stride must be greater than zero")]
    ZeroStride,

    /// `capacity * stride` does not fit in `usize`.
    #[error("backing storage size overflows usize ({capacity} elements of {stride} bytes)")]
    SizeOverflow {
        /// The requested capacity.
        capacity: usize,
        /// The requested stride.
        stride: usize,
    },

    /// The allocator could not provide the backing storage.
    #[error("failed to allocate {bytes} bytes of backing storage")]
    AllocationFailed {
        /// Number of bytes requested.
        bytes: usize,
    },
}

impl QueueError {
    /// Returns `true` if the configuration itself was invalid, as opposed
    /// to the allocator refusing a valid request.
    #[inline]
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, Self::ZeroCapacity | Self::ZeroStride | Self::SizeOverflow { .. })
    }
}
