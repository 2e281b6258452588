use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pet::CareAction;

/// Every state change in the system produces an Event.
/// The CLI prints them; a GUI would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A paid care action (feed/play/rest) was applied to the pet.
    CareApplied {
        action: CareAction,
        cost: u64,
        hunger: f64,
        happiness: f64,
        energy: f64,
        at: DateTime<Utc>,
    },
    /// The pet was reset to its default state.
    PetReset {
        name: String,
        at: DateTime<Utc>,
    },
    /// Idle-time decay fired (at least one whole minute had accrued).
    PetDecayed {
        elapsed_min: i64,
        hunger: f64,
        happiness: f64,
        energy: f64,
        at: DateTime<Utc>,
    },
    SessionStarted {
        id: String,
        description: String,
        at: DateTime<Utc>,
    },
    /// Live duration update for the active session (display only).
    SessionProgress {
        id: String,
        duration_min: u64,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        id: String,
        duration_min: u64,
        coins_earned: u64,
        balance: u64,
        at: DateTime<Utc>,
    },
    /// Active session discarded without credit.
    SessionCancelled {
        id: String,
        at: DateTime<Utc>,
    },
}
