use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Process-wide correlation-ID allocator.
///
/// Each process picks a random UUID once at startup and pairs it with a
/// monotonically increasing counter; the pair is globally unique for the life
/// of the process without requiring any coordination beyond a single atomic
/// increment, and it is not deterministic across restarts.
#[derive(Debug)]
pub struct CorrelationIdGenerator {
    process_id: Uuid,
    counter: AtomicU64,
}

impl CorrelationIdGenerator {
    pub fn new() -> Self {
        Self {
            process_id: Uuid::new_v4(),
            counter: AtomicU64::new(0),
        }
    }

    /// Allocates the next correlation ID. Safe to call concurrently from any
    /// number of request-handling tasks.
    pub fn next(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}-{seq:x}", self.process_id)
    }
}

impl Default for CorrelationIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
