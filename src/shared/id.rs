//! Prefixed ID Generator
//!
//! Time-ordered identifiers of the form `<prefix>-<n>`, e.g.
//! `thread-1170112847386624000`. `n` packs milliseconds since the forum
//! epoch, a 10-bit machine id and a 12-bit per-millisecond sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Forum epoch (2023-01-01T00:00:00.000Z)
const FORUM_EPOCH: u64 = 1672531200000;

const MAX_SEQUENCE: u64 = 0xFFF;

pub const THREAD_PREFIX: &str = "thread";
pub const COMMENT_PREFIX: &str = "comment";
pub const REPLY_PREFIX: &str = "reply";

#[derive(Default)]
struct Clock {
    last_timestamp: u64,
    sequence: u64,
}

/// Snowflake-style ID generator, safe to share across threads
pub struct IdGenerator {
    machine_id: u64,
    clock: Mutex<Clock>,
}

impl IdGenerator {
    /// Create a new generator for the given machine (10 bits)
    pub fn new(machine_id: u16) -> Self {
        Self {
            machine_id: u64::from(machine_id) & 0x3FF,
            clock: Mutex::new(Clock::default()),
        }
    }

    /// Generate a raw numeric ID
    ///
    /// Timestamp and sequence are read and advanced under one lock. Once the
    /// sequence is exhausted within a millisecond, waits for the next one.
    /// A clock that moves backwards is treated as still being at the last
    /// timestamp.
    pub fn next_raw(&self) -> u64 {
        let mut clock = self.clock.lock();
        let mut timestamp = current_timestamp().max(clock.last_timestamp);

        if timestamp == clock.last_timestamp {
            clock.sequence = (clock.sequence + 1) & MAX_SEQUENCE;
            if clock.sequence == 0 {
                while timestamp <= clock.last_timestamp {
                    std::hint::spin_loop();
                    timestamp = current_timestamp();
                }
            }
        } else {
            clock.sequence = 0;
        }
        clock.last_timestamp = timestamp;

        (timestamp.saturating_sub(FORUM_EPOCH) << 22) | (self.machine_id << 12) | clock.sequence
    }

    /// Generate an ID with the given prefix
    pub fn generate(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_raw())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}

fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(FORUM_EPOCH)
}
