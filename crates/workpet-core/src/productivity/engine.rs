//! Productivity engine implementation.
//!
//! Owns the coin balance, the session history, and the single active
//! session. Like the pet engine it is caller-polled: `tick()` refreshes the
//! active session's live duration, and coins only move on session completion
//! or through the [`CoinGate`].
//!
//! Domain-rule violations never error: starting over an active session,
//! ending or cancelling with none, blank descriptions, and overdrawn spends
//! are all silent no-ops surfaced as `None`/`false`.

use chrono::{DateTime, Local, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::session::{WorkSession, HISTORY_CAP, STARTING_COINS};
use super::stats::WorkStats;
use crate::events::Event;

/// Sole channel through which coins may be debited.
///
/// Keeping all debits behind this trait enforces the non-negative-balance
/// invariant in one place; the pet engine takes the gate as a seam so its
/// care actions can be funded (and tested) without knowing the wallet.
pub trait CoinGate {
    /// Deduct `amount` if the balance covers it. Returns `false` and leaves
    /// the balance untouched otherwise.
    fn spend_coins(&mut self, amount: u64) -> bool;
}

/// The productivity side's persisted state record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityState {
    pub coins: u64,
    pub total_work_min: u64,
    pub total_sessions: u64,
    #[serde(default)]
    pub current_session: Option<WorkSession>,
    /// Completed sessions, most recent first, capped at [`HISTORY_CAP`].
    pub work_history: Vec<WorkSession>,
    pub last_work_date: DateTime<Utc>,
}

impl ProductivityState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self::with_starting_coins(STARTING_COINS, now)
    }

    pub fn with_starting_coins(coins: u64, now: DateTime<Utc>) -> Self {
        Self {
            coins,
            total_work_min: 0,
            total_sessions: 0,
            current_session: None,
            work_history: Vec::new(),
            last_work_date: now,
        }
    }

    /// Force the record back into its invariants after an untrusted load:
    /// history holds only completed sessions and never exceeds the cap.
    pub fn sanitized(mut self) -> Self {
        self.work_history.retain(|s| s.completed);
        self.work_history.truncate(HISTORY_CAP);
        self
    }
}

/// Core productivity engine.
///
/// Owns the productivity record and is its sole mutator.
#[derive(Debug, Clone)]
pub struct ProductivityEngine {
    state: ProductivityState,
}

impl ProductivityEngine {
    pub fn new() -> Self {
        Self {
            state: ProductivityState::new(Utc::now()),
        }
    }

    pub fn with_starting_coins(coins: u64) -> Self {
        Self {
            state: ProductivityState::with_starting_coins(coins, Utc::now()),
        }
    }

    /// Resume from a previously persisted record.
    pub fn from_state(state: ProductivityState) -> Self {
        Self { state }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &ProductivityState {
        &self.state
    }

    pub fn coins(&self) -> u64 {
        self.state.coins
    }

    pub fn current_session(&self) -> Option<&WorkSession> {
        self.state.current_session.as_ref()
    }

    /// Derived statistics: today's slice (local midnight onwards) vs all
    /// time. Pure projection, no mutation.
    pub fn work_stats(&self) -> WorkStats {
        WorkStats::collect(&self.state, local_midnight_utc())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start a new work session.
    ///
    /// No-op if a session is already active or the description is blank.
    pub fn start_session(&mut self, description: &str) -> Option<Event> {
        if self.state.current_session.is_some() {
            return None;
        }
        let description = description.trim();
        if description.is_empty() {
            return None;
        }
        let now = Utc::now();
        let session = WorkSession::begin(description, now);
        let event = Event::SessionStarted {
            id: session.id.clone(),
            description: session.description.clone(),
            at: now,
        };
        self.state.current_session = Some(session);
        Some(event)
    }

    /// Finish the active session: finalize duration, credit earnings, move
    /// it into history. No-op without an active session.
    pub fn end_session(&mut self) -> Option<Event> {
        let mut session = self.state.current_session.take()?;
        let now = Utc::now();
        let duration_min = session.elapsed_min(now);
        let coins_earned = WorkSession::earnings(duration_min);

        session.end_time = Some(now);
        session.duration_min = duration_min;
        session.coins_earned = coins_earned;
        session.completed = true;

        self.state.coins += coins_earned;
        self.state.total_work_min += duration_min;
        self.state.total_sessions += 1;
        self.state.last_work_date = now;

        let event = Event::SessionCompleted {
            id: session.id.clone(),
            duration_min,
            coins_earned,
            balance: self.state.coins,
            at: now,
        };
        self.state.work_history.insert(0, session);
        self.state.work_history.truncate(HISTORY_CAP);
        Some(event)
    }

    /// Discard the active session without credit; history and totals stay
    /// untouched. No-op without an active session.
    pub fn cancel_session(&mut self) -> Option<Event> {
        let session = self.state.current_session.take()?;
        Some(Event::SessionCancelled {
            id: session.id,
            at: Utc::now(),
        })
    }

    /// Call periodically while a session runs. Refreshes the live duration
    /// for display; returns `None` when idle or unchanged so the caller can
    /// skip persistence. Coins never move here.
    pub fn tick(&mut self) -> Option<Event> {
        let now = Utc::now();
        let session = self.state.current_session.as_mut()?;
        let duration_min = session.elapsed_min(now);
        if duration_min == session.duration_min {
            return None;
        }
        session.duration_min = duration_min;
        Some(Event::SessionProgress {
            id: session.id.clone(),
            duration_min,
            at: now,
        })
    }
}

impl CoinGate for ProductivityEngine {
    fn spend_coins(&mut self, amount: u64) -> bool {
        if self.state.coins >= amount {
            self.state.coins -= amount;
            true
        } else {
            false
        }
    }
}

impl Default for ProductivityEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's start (local midnight) as a UTC instant, for partitioning the
/// session history.
fn local_midnight_utc() -> DateTime<Utc> {
    let midnight = Local::now().date_naive().and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}
