//! Snowflake ID Generator
//!
//! Time-ordered 64-bit ids for users, listings and bookings. Layout:
//! 41 bits of milliseconds since [`MARKETPLACE_EPOCH`], 10 bits of
//! worker id, 12 bits of per-millisecond sequence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Marketplace epoch (2021-01-01T00:00:00.000Z)
pub const MARKETPLACE_EPOCH: u64 = 1_609_459_200_000;

const WORKER_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const WORKER_MASK: u64 = (1 << WORKER_BITS) - 1;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

/// Snowflake ID generator
///
/// Millisecond and sequence share one atomic word, so concurrent callers
/// never observe the same pair.
#[derive(Debug)]
pub struct SnowflakeGenerator {
    worker_id: u64,
    /// `(millis since epoch << SEQUENCE_BITS) | sequence` of the last id
    state: AtomicU64,
}

impl SnowflakeGenerator {
    /// Create a new generator for the given worker (masked to 10 bits).
    pub fn new(worker_id: u16) -> Self {
        Self {
            worker_id: u64::from(worker_id) & WORKER_MASK,
            state: AtomicU64::new(0),
        }
    }

    /// Generate a new snowflake ID. Ids from one generator strictly increase;
    /// once a millisecond's 4096 sequence values are spent, this waits for
    /// the next millisecond.
    pub fn generate(&self) -> i64 {
        let mut current = self.state.load(Ordering::Acquire);
        loop {
            let last_millis = current >> SEQUENCE_BITS;
            let now = elapsed_millis();

            let next = if now > last_millis {
                now << SEQUENCE_BITS
            } else {
                let sequence = (current & SEQUENCE_MASK) + 1;
                if sequence > SEQUENCE_MASK {
                    std::hint::spin_loop();
                    current = self.state.load(Ordering::Acquire);
                    continue;
                }
                (last_millis << SEQUENCE_BITS) | sequence
            };

            match self.state.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return self.compose(next),
                Err(actual) => current = actual,
            }
        }
    }

    fn compose(&self, state: u64) -> i64 {
        let millis = state >> SEQUENCE_BITS;
        let sequence = state & SEQUENCE_MASK;

        ((millis << (WORKER_BITS + SEQUENCE_BITS)) | (self.worker_id << SEQUENCE_BITS) | sequence)
            as i64
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Milliseconds since [`MARKETPLACE_EPOCH`]; a clock before it reads as zero.
fn elapsed_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
        .saturating_sub(MARKETPLACE_EPOCH)
}
