//! RingQueue - Bounded FIFO Queue over Byte Storage
//!
//! A fixed-capacity circular buffer that stores elements as opaque runs of
//! `stride` bytes. Capacity is fixed at construction; a full queue rejects
//! enqueue and an empty queue rejects dequeue instead of growing or blocking.
//!
//! # Key Features
//!
//! - Single up-front allocation of `capacity * stride` bytes
//! - Full/empty disambiguation by explicit element count
//! - Per-call observability counters (attempted / rejected / succeeded)
//! - Nullable [`QueueHandle`] whose operations are safe no-ops once destroyed
//! - Typed facade [`TypedQueue<T>`] for `bytemuck::Pod` elements
//!
//! Single-threaded by contract: mutation takes `&mut self`. Wrap the queue
//! in a `Mutex` to share it.
//!
//! # Example
//!
//! ```
//! use ringqueue_rs::{Config, RingQueue};
//!
//! let mut queue = RingQueue::new(Config::for_type::<i32>(5)).unwrap();
//!
//! for v in [1i32, 0, 3, 8, 9] {
//!     assert!(queue.enqueue(&v.to_ne_bytes()));
//! }
//! assert!(queue.is_full());
//! assert!(!queue.enqueue(&13i32.to_ne_bytes()));
//!
//! let mut out = [0u8; 4];
//! assert!(queue.dequeue(&mut out));
//! assert_eq!(i32::from_ne_bytes(out), 1);
//!
//! let counters = queue.observability();
//! assert_eq!(counters.enqueue_attempted, 6);
//! assert_eq!(counters.enqueue_when_full, 1);
//! ```

mod config;
mod error;
mod handle;
mod invariants;
mod observability;
mod queue;
mod typed;

pub use config::Config;
pub use error::QueueError;
pub use handle::QueueHandle;
pub use observability::Observability;
pub use queue::RingQueue;
pub use typed::TypedQueue;
