//! Nullable queue handle.
//!
//! [`QueueHandle`] is for callers that keep a queue slot around before the
//! queue exists or after it has been torn down: a field initialised later,
//! a table of queues with holes, a pool that recycles slots. Every operation
//! on an inactive handle is a safe no-op that returns a neutral result.
//!
//! ```
//! use ringqueue_rs::QueueHandle;
//!
//! let mut handle = QueueHandle::construct(4, 4).unwrap();
//! assert!(handle.enqueue(&13i32.to_ne_bytes()));
//!
//! handle.destroy();
//! assert!(!handle.is_active());
//! assert!(!handle.enqueue(&7i32.to_ne_bytes()));
//! handle.destroy(); // no-op
//! ```

use crate::{Config, Observability, QueueError, RingQueue};

/// A handle that is either active (owns a [`RingQueue`]) or inactive.
///
/// | state    | `is_active` | `is_empty` | `is_full` | enqueue/dequeue | counters |
/// |----------|-------------|------------|-----------|-----------------|----------|
/// | active   | `true`      | `len == 0` | `len == capacity` | per queue | live copy |
/// | inactive | `false`     | `true`     | `false`   | `false`, untouched | all zero |
///
/// Construction is the only way in to the active state and [`destroy`](Self::destroy)
/// is the only way out.
#[derive(Debug, Default)]
pub struct QueueHandle {
    queue: Option<RingQueue>,
}

impl QueueHandle {
    /// Builds a queue and returns an active handle to it.
    pub fn construct(capacity: usize, stride: usize) -> Result<Self, QueueError> {
        Self::with_config(Config::new(capacity, stride))
    }

    /// Builds a queue from a full [`Config`].
    pub fn with_config(config: Config) -> Result<Self, QueueError> {
        RingQueue::new(config).map(Self::from)
    }

    /// An inactive handle.
    pub const fn null() -> Self {
        Self { queue: None }
    }

    /// Releases the queue, if any. Calling this on an inactive handle does nothing.
    pub fn destroy(&mut self) {
        if let Some(queue) = self.queue.take() {
            queue.destroy();
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.queue.is_some()
    }

    /// `false` for an inactive handle.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.queue.as_ref().is_some_and(RingQueue::is_full)
    }

    /// `true` for an inactive handle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.as_ref().is_none_or(RingQueue::is_empty)
    }

    /// See [`RingQueue::enqueue`]. Returns `false` on an inactive handle
    /// without counting the attempt.
    pub fn enqueue(&mut self, elem: &[u8]) -> bool {
        self.queue.as_mut().is_some_and(|queue| queue.enqueue(elem))
    }

    /// See [`RingQueue::dequeue`]. Returns `false` on an inactive handle
    /// without counting the attempt.
    pub fn dequeue(&mut self, out: &mut [u8]) -> bool {
        self.queue.as_mut().is_some_and(|queue| queue.dequeue(out))
    }

    /// Counter snapshot; all zero for an inactive handle.
    pub fn observability(&self) -> Observability {
        self.queue
            .as_ref()
            .map_or_else(Observability::default, RingQueue::observability)
    }

    /// Borrows the queue if the handle is active.
    pub fn as_queue(&self) -> Option<&RingQueue> {
        self.queue.as_ref()
    }

    pub fn as_queue_mut(&mut self) -> Option<&mut RingQueue> {
        self.queue.as_mut()
    }

    /// Consumes the handle, returning the queue if it was active.
    pub fn into_inner(self) -> Option<RingQueue> {
        self.queue
    }
}

impl From<RingQueue> for QueueHandle {
    fn from(queue: RingQueue) -> Self {
        Self { queue: Some(queue) }
    }
}
