//! Element-typed queue over [`RingQueue`].
//!
//! The stride is `size_of::<T>()`, so an element of the wrong size cannot be
//! passed in. `T: Pod` guarantees the byte copy in and out is sound for any
//! stored bit pattern.

use crate::{Config, Observability, QueueError, RingQueue};
use bytemuck::Pod;
use std::fmt;
use std::marker::PhantomData;

/// Fixed-capacity FIFO queue of `T` values.
///
/// Shares the counter semantics of [`RingQueue`]: every call counts as an
/// attempt, rejections on a full or empty queue are counted separately.
///
/// # Example
///
/// ```
/// use ringqueue_rs::TypedQueue;
///
/// let mut queue = TypedQueue::<u32>::new(2).unwrap();
/// assert!(queue.enqueue(1));
/// assert!(queue.enqueue(2));
/// assert!(!queue.enqueue(3)); // full
///
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.observability().enqueue_when_full, 1);
/// ```
pub struct TypedQueue<T> {
    inner: RingQueue,
    _marker: PhantomData<T>,
}

impl<T: Pod> TypedQueue<T> {
    /// Creates a queue holding up to `capacity` values.
    ///
    /// Fails with [`QueueError::ZeroStride`] for zero-sized `T`.
    pub fn new(capacity: usize) -> Result<Self, QueueError> {
        RingQueue::new(Config::for_type::<T>(capacity)).map(|inner| Self {
            inner,
            _marker: PhantomData,
        })
    }

    /// Appends `value`. Returns `false` if the queue is full.
    #[inline]
    pub fn enqueue(&mut self, value: T) -> bool {
        self.inner.enqueue(bytemuck::bytes_of(&value))
    }

    /// Removes the oldest value. Returns `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        let mut value = T::zeroed();
        self.inner
            .dequeue(bytemuck::bytes_of_mut(&mut value))
            .then_some(value)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    #[inline]
    pub fn observability(&self) -> Observability {
        self.inner.observability()
    }

    /// The underlying byte queue.
    pub fn as_bytes_queue(&self) -> &RingQueue {
        &self.inner
    }

    /// Unwraps into the byte queue, keeping contents and counters.
    pub fn into_inner(self) -> RingQueue {
        self.inner
    }
}

impl<T> fmt::Debug for TypedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedQueue")
            .field("element", &std::any::type_name::<T>())
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
    #[repr(C)]
    struct Sample {
        timestamp: u64,
        value: f32,
        channel: u32,
    }

    #[test]
    fn test_stride_follows_type() {
        let queue = TypedQueue::<Sample>::new(8).unwrap();
        assert_eq!(queue.as_bytes_queue().stride(), std::mem::size_of::<Sample>());
        assert_eq!(queue.capacity(), 8);
    }

    #[test]
    fn test_zero_sized_type_rejected() {
        assert_eq!(TypedQueue::<()>::new(4).unwrap_err(), QueueError::ZeroStride);
        assert_eq!(TypedQueue::<u8>::new(0).unwrap_err(), QueueError::ZeroCapacity);
    }

    #[test]
    fn test_struct_round_trip_in_order() {
        let mut queue = TypedQueue::<Sample>::new(3).unwrap();
        let samples: Vec<Sample> = (0..3)
            .map(|i| Sample {
                timestamp: 1000 + i,
                value: i as f32 * 0.5,
                channel: i as u32,
            })
            .collect();

        for s in &samples {
            assert!(queue.enqueue(*s));
        }
        assert!(queue.is_full());

        for s in &samples {
            assert_eq!(queue.dequeue(), Some(*s));
        }
        assert_eq!(queue.dequeue(), None);

        let counters = queue.observability();
        assert_eq!(counters.dequeue_attempted, 4);
        assert_eq!(counters.dequeue_when_empty, 1);
    }

    #[test]
    fn test_into_inner_keeps_state() {
        let mut queue = TypedQueue::<u16>::new(4).unwrap();
        assert!(queue.enqueue(0xBEEF));

        let mut raw = queue.into_inner();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.observability().enqueue_succeeded, 1);

        let mut out = [0u8; 2];
        assert!(raw.dequeue(&mut out));
        assert_eq!(u16::from_ne_bytes(out), 0xBEEF);
    }
}
