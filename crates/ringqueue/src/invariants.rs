//! Debug assertion macros for ring queue invariants.
//!
//! Only active in debug builds (`#[cfg(debug_assertions)]`), so there is
//! zero overhead in release builds.

// =============================================================================
// Bounded Count
// =============================================================================

/// Assert that the element count does not exceed capacity.
///
/// **Invariant**: `0 ≤ count ≤ capacity`
///
/// Used in: `enqueue()` and `dequeue()` after updating count
macro_rules! debug_assert_bounded_count {
    ($count:expr, $capacity:expr) => {
        debug_assert!(
            $count <= $capacity,
            "bounded count violated: count {} exceeds capacity {}",
            $count,
            $capacity
        )
    };
}

// =============================================================================
// Index Range
// =============================================================================

/// Assert that a head or tail index lies within `[0, capacity)`.
///
/// Used in: `enqueue()` for head, `dequeue()` for tail, before slot access
macro_rules! debug_assert_index_in_bounds {
    ($name:literal, $index:expr, $capacity:expr) => {
        debug_assert!(
            $index < $capacity,
            "index range violated: {} {} outside [0, {})",
            $name,
            $index,
            $capacity
        )
    };
}

// =============================================================================
// Index / Count Agreement
// =============================================================================

/// Assert that head, tail and count describe the same ring.
///
/// **Invariant**: `head == (tail + count) mod capacity`
///
/// Used in: `enqueue()` and `dequeue()` after advancing an index
macro_rules! debug_assert_ring_consistent {
    ($head:expr, $tail:expr, $count:expr, $capacity:expr) => {
        debug_assert_eq!(
            $head,
            ($tail + $count) % $capacity,
            "ring consistency violated: head {} tail {} count {} capacity {}",
            $head,
            $tail,
            $count,
            $capacity
        )
    };
}

// =============================================================================
// Counter Accounting
// =============================================================================

/// Assert that outcome counters never exceed their attempt counter.
///
/// **Invariant**: `succeeded + rejected ≤ attempted`
///
/// Used in: `enqueue()` and `dequeue()` before returning
macro_rules! debug_assert_counter_accounting {
    ($op:literal, $attempted:expr, $succeeded:expr, $rejected:expr) => {
        debug_assert!(
            $succeeded + $rejected <= $attempted,
            "counter accounting violated for {}: succeeded {} + rejected {} > attempted {}",
            $op,
            $succeeded,
            $rejected,
            $attempted
        )
    };
}

pub(crate) use debug_assert_bounded_count;
pub(crate) use debug_assert_counter_accounting;
pub(crate) use debug_assert_index_in_bounds;
pub(crate) use debug_assert_ring_consistent;
