use crate::invariants::{
    debug_assert_bounded_count, debug_assert_counter_accounting, debug_assert_index_in_bounds,
    debug_assert_ring_consistent,
};
use crate::{Config, Observability, QueueError};
use std::fmt;
use tracing::{debug, trace};

// =============================================================================
// STORAGE LAYOUT
// =============================================================================
//
// One contiguous byte buffer of `capacity * stride` bytes. Slot `i` occupies
// `buffer[i * stride .. (i + 1) * stride]`.
//
// ## Indices
//
// - `head`: next slot to write (enqueue)
// - `tail`: next slot to read (dequeue)
// - `len`:  number of stored elements
//
// Both indices wrap to 0 when they reach `capacity`. Because `head == tail`
// holds for both the empty and the full ring, fullness is decided by `len`
// alone, never by comparing indices.
//
// ## Check Ordering
//
// enqueue: attempt counter -> payload check -> full check -> copy
// dequeue: attempt counter -> empty check -> destination check -> copy
//
// A short payload on a full queue counts as neither "when full" nor success.
// A short destination on an empty queue counts as "when empty".
//
// =============================================================================

/// Fixed-capacity FIFO queue over byte storage.
///
/// Elements are opaque runs of `stride` bytes, copied in by [`enqueue`] and
/// copied out by [`dequeue`]. The queue never grows: enqueue on a full queue
/// and dequeue on an empty queue are rejected and counted.
///
/// A `RingQueue` value is always live. Use [`QueueHandle`] when you need a
/// handle that can be null or destroyed in place.
///
/// [`enqueue`]: RingQueue::enqueue
/// [`dequeue`]: RingQueue::dequeue
/// [`QueueHandle`]: crate::QueueHandle
pub struct RingQueue {
    config: Config,
    /// Next slot to be written
    head: usize,
    /// Next slot to be read
    tail: usize,
    /// Number of stored elements
    len: usize,
    counters: Observability,
    buffer: Vec<u8>,
}

impl RingQueue {
    /// Creates a new queue, allocating `capacity * stride` bytes up front.
    ///
    /// Fails if either dimension is zero, if the size overflows, or if the
    /// allocator refuses the request. Allocation failure is reported, not aborted on.
    pub fn new(config: Config) -> Result<Self, QueueError> {
        let bytes = config.validate()?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| QueueError::AllocationFailed { bytes })?;
        buffer.resize(bytes, 0);

        debug!(
            capacity = config.capacity,
            stride = config.stride,
            bytes,
            "ring queue constructed"
        );

        Ok(Self {
            config,
            head: 0,
            tail: 0,
            len: 0,
            counters: Observability::new(),
            buffer,
        })
    }

    /// Shorthand for `RingQueue::new(Config::new(capacity, stride))`.
    pub fn with_capacity(capacity: usize, stride: usize) -> Result<Self, QueueError> {
        Self::new(Config::new(capacity, stride))
    }

    // ---------------------------------------------------------------------
    // STATUS
    // ---------------------------------------------------------------------

    /// Returns the configuration this queue was built with.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the maximum number of elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the byte size of one element.
    #[inline]
    pub fn stride(&self) -> usize {
        self.config.stride
    }

    /// Returns the current number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no elements are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `len() == capacity()`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.config.capacity
    }

    /// Returns a copy of the call-outcome counters.
    #[inline]
    pub fn observability(&self) -> Observability {
        self.counters
    }

    // ---------------------------------------------------------------------
    // PRODUCER SIDE
    // ---------------------------------------------------------------------

    /// Copies one element from `elem` into the queue.
    ///
    /// The first `stride()` bytes of `elem` are stored verbatim; any extra
    /// bytes are ignored. Returns `false` without storing anything if `elem`
    /// is shorter than `stride()` or the queue is full.
    pub fn enqueue(&mut self, elem: &[u8]) -> bool {
        self.counters.record_enqueue_attempt();

        let stride = self.config.stride;
        let capacity = self.config.capacity;

        let Some(src) = elem.get(..stride) else {
            trace!(len = elem.len(), stride, "enqueue rejected: short payload");
            return false;
        };

        if self.is_full() {
            self.counters.record_enqueue_full();
            trace!(capacity, "enqueue rejected: queue full");
            debug_assert_counter_accounting!(
                "enqueue",
                self.counters.enqueue_attempted,
                self.counters.enqueue_succeeded,
                self.counters.enqueue_when_full
            );
            return false;
        }

        debug_assert_index_in_bounds!("head", self.head, capacity);
        let offset = self.head * stride;
        self.buffer[offset..offset + stride].copy_from_slice(src);

        self.head = Self::next_index(self.head, capacity);
        self.len += 1;

        debug_assert_bounded_count!(self.len, capacity);
        debug_assert_ring_consistent!(self.head, self.tail, self.len, capacity);

        self.counters.record_enqueue_success();
        debug_assert_counter_accounting!(
            "enqueue",
            self.counters.enqueue_attempted,
            self.counters.enqueue_succeeded,
            self.counters.enqueue_when_full
        );
        true
    }

    // ---------------------------------------------------------------------
    // CONSUMER SIDE
    // ---------------------------------------------------------------------

    /// Copies the oldest element into `out` and removes it from the queue.
    ///
    /// The element is written to the first `stride()` bytes of `out`; any
    /// extra bytes are left untouched. Returns `false` if the queue is empty
    /// or `out` is shorter than `stride()`, in which case the queue is unchanged.
    pub fn dequeue(&mut self, out: &mut [u8]) -> bool {
        self.counters.record_dequeue_attempt();

        let stride = self.config.stride;
        let capacity = self.config.capacity;

        if self.is_empty() {
            self.counters.record_dequeue_empty();
            trace!("dequeue rejected: queue empty");
            debug_assert_counter_accounting!(
                "dequeue",
                self.counters.dequeue_attempted,
                self.counters.dequeue_succeeded,
                self.counters.dequeue_when_empty
            );
            return false;
        }

        let out_len = out.len();
        let Some(dst) = out.get_mut(..stride) else {
            trace!(len = out_len, stride, "dequeue rejected: short destination");
            return false;
        };

        debug_assert_index_in_bounds!("tail", self.tail, capacity);
        let offset = self.tail * stride;
        dst.copy_from_slice(&self.buffer[offset..offset + stride]);

        self.tail = Self::next_index(self.tail, capacity);
        self.len -= 1;

        debug_assert_bounded_count!(self.len, capacity);
        debug_assert_ring_consistent!(self.head, self.tail, self.len, capacity);

        self.counters.record_dequeue_success();
        debug_assert_counter_accounting!(
            "dequeue",
            self.counters.dequeue_attempted,
            self.counters.dequeue_succeeded,
            self.counters.dequeue_when_empty
        );
        true
    }

    // ---------------------------------------------------------------------
    // LIFECYCLE
    // ---------------------------------------------------------------------

    /// Releases the backing storage.
    ///
    /// Dropping the queue has the same effect; this form logs the final counters.
    pub fn destroy(self) {
        let counters = self.counters;
        debug!(
            capacity = self.config.capacity,
            stride = self.config.stride,
            remaining = self.len,
            enqueue_attempted = counters.enqueue_attempted,
            enqueue_succeeded = counters.enqueue_succeeded,
            dequeue_attempted = counters.dequeue_attempted,
            dequeue_succeeded = counters.dequeue_succeeded,
            "ring queue destroyed"
        );
    }

    #[inline]
    fn next_index(index: usize, capacity: usize) -> usize {
        let next = index + 1;
        if next >= capacity {
            0
        } else {
            next
        }
    }
}

impl fmt::Debug for RingQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("capacity", &self.config.capacity)
            .field("stride", &self.config.stride)
            .field("len", &self.len)
            .field("head", &self.head)
            .field("tail", &self.tail)
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}
