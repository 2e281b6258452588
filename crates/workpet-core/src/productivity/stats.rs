//! Derived work statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engine::ProductivityState;

/// Read-only aggregation over the session history: today's slice versus all
/// time. `total_coins` is the current balance, not lifetime earnings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WorkStats {
    pub today_work_min: u64,
    pub today_coins: u64,
    pub today_sessions: u64,
    pub total_work_min: u64,
    pub total_coins: u64,
    pub total_sessions: u64,
}

impl WorkStats {
    /// Project stats from a state record, partitioning history entries that
    /// started at or after `today_start`.
    pub fn collect(state: &ProductivityState, today_start: DateTime<Utc>) -> Self {
        let mut stats = WorkStats {
            total_work_min: state.total_work_min,
            total_coins: state.coins,
            total_sessions: state.total_sessions,
            ..WorkStats::default()
        };
        for session in state
            .work_history
            .iter()
            .filter(|s| s.start_time >= today_start)
        {
            stats.today_work_min += session.duration_min;
            stats.today_coins += session.coins_earned;
            stats.today_sessions += 1;
        }
        stats
    }
}
