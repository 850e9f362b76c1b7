//! Shared helpers for the factories.

use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Next value of a process-wide counter.
///
/// Factories derive unique identifying data (phone numbers, display names)
/// from it so concurrently running tests never collide on unique columns.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}
