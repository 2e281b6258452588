//! Productivity state engine: work-session lifecycle and coin economy.

mod engine;
mod session;
mod stats;

pub use engine::{CoinGate, ProductivityEngine, ProductivityState};
pub use session::{WorkSession, COINS_PER_MINUTE, HISTORY_CAP, MIN_EARNING_MIN, STARTING_COINS};
pub use stats::WorkStats;
