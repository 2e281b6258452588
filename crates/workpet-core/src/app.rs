//! Application container: both engines plus their persistence.
//!
//! The CLI opens one [`App`] per invocation and every GUI would own exactly
//! one for its lifetime -- there are no ambient singletons. Each public
//! operation is a synchronous read-modify-write-persist sequence; nothing
//! yields control mid-operation, so operations are atomic with respect to
//! each other.
//!
//! Cross-record note: a care action persists two records (the coin debit,
//! then the pet write). A crash between the two leaves the debit without the
//! stat change. This is an accepted inconsistency window carried over from
//! the original design; there is no two-phase guard.

use crate::events::Event;
use crate::pet::{CareAction, PetEngine, PetState};
use crate::productivity::{CoinGate, ProductivityEngine, ProductivityState, WorkStats};
use crate::storage::{Config, Database};
use crate::Result;

/// Owns the database, config, and the two state engines.
pub struct App {
    db: Database,
    config: Config,
    pet: PetEngine,
    productivity: ProductivityEngine,
}

impl App {
    /// Open the default database and config, loading both state records
    /// (corrupt or absent slots fall back to defaults).
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or the config
    /// cannot be read or created.
    pub fn open() -> Result<Self> {
        let db = Database::open()?;
        let config = Config::load()?;
        Ok(Self::with_database(db, config))
    }

    /// Assemble an app over an already-open database (tests use this with
    /// in-memory or temp-file databases).
    pub fn with_database(db: Database, config: Config) -> Self {
        let pet = PetEngine::from_state(db.load_pet_state(&config.pet.default_name));
        let productivity = ProductivityEngine::from_state(
            db.load_productivity_state(config.economy.starting_coins),
        );
        Self {
            db,
            config,
            pet,
            productivity,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Snapshot of the pet record. Mutating the returned clone has no
    /// effect on the engine.
    pub fn pet(&self) -> &PetState {
        self.pet.state()
    }

    /// Snapshot of the productivity record.
    pub fn productivity(&self) -> &ProductivityState {
        self.productivity.state()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Derived work statistics (today vs all time). No mutation.
    pub fn work_stats(&self) -> WorkStats {
        self.productivity.work_stats()
    }

    // ── Pet actions ──────────────────────────────────────────────────

    /// Apply a paid care action. `None` means the coin gate rejected the
    /// spend and nothing changed or was written.
    pub fn care(&mut self, action: CareAction) -> Option<Event> {
        let event = self.pet.care(action, &mut self.productivity)?;
        // Coin debit lands first, then the pet write (see module note).
        self.db.save_productivity_state(self.productivity.state());
        self.db.save_pet_state(self.pet.state());
        Some(event)
    }

    pub fn feed(&mut self) -> Option<Event> {
        self.care(CareAction::Feed)
    }

    pub fn play(&mut self) -> Option<Event> {
        self.care(CareAction::Play)
    }

    pub fn rest(&mut self) -> Option<Event> {
        self.care(CareAction::Rest)
    }

    /// Reset the pet to its configured default. No coin cost.
    pub fn reset_pet(&mut self) -> Event {
        let name = self.config.pet.default_name.clone();
        let event = self.pet.reset(&name);
        self.db.save_pet_state(self.pet.state());
        event
    }

    // ── Productivity actions ─────────────────────────────────────────

    /// Start a work session; `None` if one is active or the description is
    /// blank.
    pub fn start_session(&mut self, description: &str) -> Option<Event> {
        let event = self.productivity.start_session(description)?;
        self.db.save_productivity_state(self.productivity.state());
        Some(event)
    }

    /// End the active session, crediting earnings; `None` when idle.
    pub fn end_session(&mut self) -> Option<Event> {
        let event = self.productivity.end_session()?;
        self.db.save_productivity_state(self.productivity.state());
        Some(event)
    }

    /// Cancel the active session without credit; `None` when idle.
    pub fn cancel_session(&mut self) -> Option<Event> {
        let event = self.productivity.cancel_session()?;
        self.db.save_productivity_state(self.productivity.state());
        Some(event)
    }

    /// Spend coins through the gate; `false` leaves everything untouched.
    pub fn spend_coins(&mut self, amount: u64) -> bool {
        if !self.productivity.spend_coins(amount) {
            return false;
        }
        self.db.save_productivity_state(self.productivity.state());
        true
    }

    // ── Polling ──────────────────────────────────────────────────────

    /// Poll both engines once. Persists a record only when its engine
    /// reported a change. Intended to run every `config.tick_period_secs`
    /// (60 s by default).
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if let Some(event) = self.pet.tick() {
            self.db.save_pet_state(self.pet.state());
            events.push(event);
        }
        if let Some(event) = self.productivity.tick() {
            self.db.save_productivity_state(self.productivity.state());
            events.push(event);
        }
        events
    }
}
