/// Point-in-time copy of a queue's call-outcome counters.
///
/// Every counter is monotonically non-decreasing over the life of a queue.
/// A snapshot is detached from the queue; mutating it has no effect on the
/// live counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observability {
    /// Every enqueue call on an active queue
    pub enqueue_attempted: u64,
    /// Enqueue calls rejected because the queue was full
    pub enqueue_when_full: u64,
    /// Enqueue calls that stored an element
    pub enqueue_succeeded: u64,
    /// Every dequeue call on an active queue
    pub dequeue_attempted: u64,
    /// Dequeue calls rejected because the queue was empty
    pub dequeue_when_empty: u64,
    /// Dequeue calls that returned an element
    pub dequeue_succeeded: u64,
}

impl Observability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue attempts rejected for a missing or short payload.
    #[inline]
    pub fn enqueue_rejected_payload(&self) -> u64 {
        self.enqueue_attempted
            .saturating_sub(self.enqueue_succeeded)
            .saturating_sub(self.enqueue_when_full)
    }

    /// Dequeue attempts rejected for a missing or short destination.
    #[inline]
    pub fn dequeue_rejected_payload(&self) -> u64 {
        self.dequeue_attempted
            .saturating_sub(self.dequeue_succeeded)
            .saturating_sub(self.dequeue_when_empty)
    }

    pub(crate) fn record_enqueue_attempt(&mut self) {
        self.enqueue_attempted += 1;
    }

    pub(crate) fn record_enqueue_full(&mut self) {
        self.enqueue_when_full += 1;
    }

    pub(crate) fn record_enqueue_success(&mut self) {
        self.enqueue_succeeded += 1;
    }

    pub(crate) fn record_dequeue_attempt(&mut self) {
        self.dequeue_attempted += 1;
    }

    pub(crate) fn record_dequeue_empty(&mut self) {
        self.dequeue_when_empty += 1;
    }

    pub(crate) fn record_dequeue_success(&mut self) {
        self.dequeue_succeeded += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_payload_counts() {
        let counters = Observability {
            enqueue_attempted: 5,
            enqueue_when_full: 1,
            enqueue_succeeded: 3,
            dequeue_attempted: 4,
            dequeue_when_empty: 2,
            dequeue_succeeded: 2,
        };
        assert_eq!(counters.enqueue_rejected_payload(), 1);
        assert_eq!(counters.dequeue_rejected_payload(), 0);
        assert_eq!(Observability::new().enqueue_rejected_payload(), 0);
    }

    #[test]
    fn test_record_helpers() {
        let mut counters = Observability::new();
        counters.record_enqueue_attempt();
        counters.record_enqueue_attempt();
        counters.record_enqueue_full();
        counters.record_enqueue_success();
        counters.record_dequeue_attempt();
        counters.record_dequeue_empty();

        assert_eq!(
            counters,
            Observability {
                enqueue_attempted: 2,
                enqueue_when_full: 1,
                enqueue_succeeded: 1,
                dequeue_attempted: 1,
                dequeue_when_empty: 1,
                dequeue_succeeded: 0,
            }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_snapshot() {
        let counters = Observability {
            enqueue_attempted: 7,
            enqueue_succeeded: 6,
            enqueue_when_full: 1,
            ..Observability::default()
        };
        let json = serde_json::to_string(&counters).unwrap();
        assert!(json.contains("\"enqueue_attempted\":7"));
        let back: Observability = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counters);
    }
}
