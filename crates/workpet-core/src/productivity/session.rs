//! Work session record and economy constants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coins credited per completed work minute.
pub const COINS_PER_MINUTE: u64 = 2;
/// Sessions shorter than this earn nothing (anti-gaming floor).
pub const MIN_EARNING_MIN: u64 = 5;
/// History keeps only the most recent completed sessions.
pub const HISTORY_CAP: usize = 50;
/// Coin balance granted on first load.
pub const STARTING_COINS: u64 = 50;

/// A timed, user-described span of work, convertible to coins on completion.
///
/// Created in active form (`completed = false`, zero duration, no end time).
/// Exactly one active session may exist at a time; it either completes and
/// enters history, or is cancelled and discarded entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    /// Unique id derived from the start time (epoch milliseconds).
    pub id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Whole minutes. Live-updated while active, final once completed.
    pub duration_min: u64,
    pub description: String,
    pub coins_earned: u64,
    pub completed: bool,
}

impl WorkSession {
    /// Open a new active session.
    pub fn begin(description: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            start_time: now,
            end_time: None,
            duration_min: 0,
            description: description.into(),
            coins_earned: 0,
            completed: false,
        }
    }

    /// Whole minutes elapsed since the session started.
    pub fn elapsed_min(&self, now: DateTime<Utc>) -> u64 {
        (now - self.start_time).num_minutes().max(0) as u64
    }

    /// Coins earned for a session of the given length.
    pub fn earnings(duration_min: u64) -> u64 {
        if duration_min >= MIN_EARNING_MIN {
            duration_min * COINS_PER_MINUTE
        } else {
            0
        }
    }
}
