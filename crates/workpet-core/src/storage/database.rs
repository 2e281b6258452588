//! SQLite-based state storage.
//!
//! Two independent key-value slots hold the pet and productivity records as
//! JSON. Loading is lenient: an absent slot yields the type's default, and a
//! corrupt or mis-shaped payload is logged and replaced by the default --
//! never an error to the caller. Saving is best-effort: failures are logged
//! and swallowed so persistence can never crash a state mutation.

use chrono::Utc;
use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::{CoreError, StorageError};
use crate::pet::PetState;
use crate::productivity::ProductivityState;

/// Slot key for the pet record.
pub const PET_STATE_KEY: &str = "pet_state";
/// Slot key for the productivity record.
pub const PRODUCTIVITY_STATE_KEY: &str = "productivity_state";

/// SQLite database holding the persisted state slots.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/workpet/workpet.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("workpet.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open the database at an explicit path (tests and tooling).
    pub fn open_at(path: &std::path::Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS kv (
                    key   TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );",
            )
            .map_err(|e| StorageError::MigrationFailed(e.to_string()))
    }

    // ── Raw kv primitives ────────────────────────────────────────────

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove a slot entirely; the next load falls back to the default.
    pub fn kv_delete(&self, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Typed slots ──────────────────────────────────────────────────

    /// Load the pet record, falling back to the default for an absent,
    /// unreadable, or mis-shaped slot. Never fails.
    pub fn load_pet_state(&self, default_name: &str) -> PetState {
        let default = || PetState::new(default_name, Utc::now());
        match self.kv_get(PET_STATE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<PetState>(&json) {
                Ok(state) => state.sanitized(),
                Err(e) => {
                    log::warn!("invalid pet state in storage, using default: {e}");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                log::error!("failed to load pet state: {e}");
                default()
            }
        }
    }

    /// Persist the pet record. Best-effort: failures are logged, never
    /// propagated.
    pub fn save_pet_state(&self, state: &PetState) {
        match serde_json::to_string(state) {
            Ok(json) => {
                if let Err(e) = self.kv_set(PET_STATE_KEY, &json) {
                    log::error!("failed to save pet state: {e}");
                }
            }
            Err(e) => log::error!("failed to serialize pet state: {e}"),
        }
    }

    /// Load the productivity record, falling back to the default for an
    /// absent, unreadable, or mis-shaped slot. Never fails.
    pub fn load_productivity_state(&self, starting_coins: u64) -> ProductivityState {
        let default = || ProductivityState::with_starting_coins(starting_coins, Utc::now());
        match self.kv_get(PRODUCTIVITY_STATE_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<ProductivityState>(&json) {
                Ok(state) => state.sanitized(),
                Err(e) => {
                    log::warn!("invalid productivity state in storage, using default: {e}");
                    default()
                }
            },
            Ok(None) => default(),
            Err(e) => {
                log::error!("failed to load productivity state: {e}");
                default()
            }
        }
    }

    /// Persist the productivity record. Best-effort: failures are logged,
    /// never propagated.
    pub fn save_productivity_state(&self, state: &ProductivityState) {
        match serde_json::to_string(state) {
            Ok(json) => {
                if let Err(e) = self.kv_set(PRODUCTIVITY_STATE_KEY, &json) {
                    log::error!("failed to save productivity state: {e}");
                }
            }
            Err(e) => log::error!("failed to serialize productivity state: {e}"),
        }
    }
}
