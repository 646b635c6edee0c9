use crate::QueueError;

/// Configuration for [`RingQueue`](crate::RingQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Maximum number of elements the queue holds (must be > 0)
    pub capacity: usize,
    /// Byte size of one element (must be > 0)
    pub stride: usize,
}

impl Config {
    /// Creates a new configuration with custom settings.
    pub const fn new(capacity: usize, stride: usize) -> Self {
        Self { capacity, stride }
    }

    /// Configuration for `capacity` elements of type `T`.
    ///
    /// A zero-sized `T` produces a zero stride, which [`validate`](Self::validate) rejects.
    pub const fn for_type<T>(capacity: usize) -> Self {
        Self::new(capacity, std::mem::size_of::<T>())
    }

    /// Sets the capacity.
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the stride.
    pub const fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Returns the size of the backing storage in bytes, or `None` on overflow.
    #[inline]
    pub const fn buffer_len(&self) -> Option<usize> {
        self.capacity.checked_mul(self.stride)
    }

    /// Checks that the configuration describes a constructible queue.
    ///
    /// Capacity is checked before stride, so `Config::new(0, 0)` reports
    /// [`QueueError::ZeroCapacity`].
    pub fn validate(&self) -> Result<usize, QueueError> {
        if self.capacity == 0 {
            return Err(QueueError::ZeroCapacity);
        }
        if self.stride == 0 {
            return Err(QueueError::ZeroStride);
        }
        self.buffer_len().ok_or(QueueError::SizeOverflow {
            capacity: self.capacity,
            stride: self.stride,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_zero_fields() {
        assert_eq!(Config::new(0, 4).validate(), Err(QueueError::ZeroCapacity));
        assert_eq!(Config::new(10, 0).validate(), Err(QueueError::ZeroStride));
        assert_eq!(Config::new(0, 0).validate(), Err(QueueError::ZeroCapacity));
    }

    #[test]
    fn test_validate_returns_buffer_len() {
        assert_eq!(Config::new(10, 4).validate(), Ok(40));
        assert_eq!(Config::for_type::<u64>(3).validate(), Ok(24));
    }

    #[test]
    fn test_overflowing_size() {
        let config = Config::new(usize::MAX, 2);
        assert_eq!(config.buffer_len(), None);
        assert_eq!(
            config.validate(),
            Err(QueueError::SizeOverflow {
                capacity: usize::MAX,
                stride: 2
            })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_config() {
        let config = Config::new(5, 4);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"capacity":5,"stride":4}"#);
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::for_type::<u32>(1).with_capacity(8).with_stride(16);
        assert_eq!(config, Config::new(8, 16));
        assert_eq!(Config::for_type::<()>(4).validate(), Err(QueueError::ZeroStride));
    }
}
