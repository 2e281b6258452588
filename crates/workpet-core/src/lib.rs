//! # Workpet Core Library
//!
//! This library provides the core business logic for Workpet, a virtual-pet
//! gamification layer over a personal work-session timer. Users log work
//! sessions to earn coins and spend those coins on pet care. It implements a
//! CLI-first philosophy where all operations are available via a standalone
//! CLI binary; any GUI is a thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Pet Engine**: A wall-clock-based state machine for the pet's decaying
//!   stat gauges. No internal threads -- the caller is responsible for
//!   periodically invoking `tick()` for decay updates
//! - **Productivity Engine**: Work-session lifecycle, coin economy, and the
//!   coin-spend gate that funds pet care
//! - **Storage**: SQLite-backed key-value slots for both state records and
//!   TOML-based configuration
//!
//! ## Key Components
//!
//! - [`PetEngine`]: Pet stat decay and care actions
//! - [`ProductivityEngine`]: Session lifecycle and coin balance
//! - [`App`]: Owns both engines plus the database; every operation is an
//!   atomic read-modify-write-persist sequence
//! - [`Database`]: State persistence
//! - [`Config`]: Application configuration management

pub mod app;
pub mod error;
pub mod events;
pub mod pet;
pub mod productivity;
pub mod storage;

pub use app::App;
pub use error::{ConfigError, CoreError, Result, StorageError};
pub use events::Event;
pub use pet::{CareAction, PetEngine, PetState};
pub use productivity::{
    CoinGate, ProductivityEngine, ProductivityState, WorkSession, WorkStats,
};
pub use storage::{Config, Database};
