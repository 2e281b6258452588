//! On-disk persistence round-trips using temp files.

use chrono::{Duration, Utc};
use tempfile::TempDir;
use workpet_core::storage::database::{PET_STATE_KEY, PRODUCTIVITY_STATE_KEY};
use workpet_core::{
    App, Config, Database, PetState, ProductivityState, WorkSession,
};

fn temp_db(dir: &TempDir) -> Database {
    Database::open_at(&dir.path().join("workpet.db")).unwrap()
}

#[test]
fn state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = App::with_database(temp_db(&dir), Config::default());
        app.feed();
        app.start_session("persisted across reopen");
    }
    let app = App::with_database(temp_db(&dir), Config::default());
    assert_eq!(app.pet().hunger, 70.0);
    assert_eq!(app.productivity().coins, 40);
    assert_eq!(
        app.productivity().current_session.as_ref().unwrap().description,
        "persisted across reopen"
    );
}

#[test]
fn slot_round_trip_is_exact() {
    let dir = TempDir::new().unwrap();
    let db = temp_db(&dir);

    let now = Utc::now();
    let mut pet = PetState::new("Mochi", now - Duration::minutes(2));
    pet.hunger = 12.5;
    pet.energy = 99.9;
    db.save_pet_state(&pet);

    let mut prod = ProductivityState::new(now);
    prod.coins = 77;
    let mut done = WorkSession::begin("exact", now - Duration::minutes(20));
    done.duration_min = 20;
    done.coins_earned = 40;
    done.completed = true;
    done.end_time = Some(now);
    prod.work_history.push(done);
    db.save_productivity_state(&prod);

    assert_eq!(db.load_pet_state("Buddy"), pet);
    assert_eq!(db.load_productivity_state(50), prod);
}

#[test]
fn corrupt_slots_recover_independently() {
    let dir = TempDir::new().unwrap();
    let db = temp_db(&dir);

    let mut prod = ProductivityState::new(Utc::now());
    prod.coins = 200;
    db.save_productivity_state(&prod);
    db.kv_set(PET_STATE_KEY, "{\"half\": ").unwrap();

    // The broken pet slot defaults; the healthy productivity slot is kept.
    let app = App::with_database(db, Config::default());
    assert_eq!(app.pet().hunger, 50.0);
    assert_eq!(app.productivity().coins, 200);
}

#[test]
fn deleted_slot_loads_default_on_next_open() {
    let dir = TempDir::new().unwrap();
    let db = temp_db(&dir);
    let mut app = App::with_database(db, Config::default());
    app.feed();

    let db = temp_db(&dir);
    db.kv_delete(PRODUCTIVITY_STATE_KEY).unwrap();
    let app = App::with_database(db, Config::default());
    assert_eq!(app.productivity().coins, 50);
    // Pet slot untouched by the delete.
    assert_eq!(app.pet().hunger, 70.0);
}

#[test]
fn configured_defaults_flow_into_fresh_slots() {
    let dir = TempDir::new().unwrap();
    let config = Config {
        pet: workpet_core::storage::PetConfig {
            default_name: "Nibbles".into(),
        },
        economy: workpet_core::storage::EconomyConfig { starting_coins: 10 },
        ..Config::default()
    };
    let app = App::with_database(temp_db(&dir), config);
    assert_eq!(app.pet().name, "Nibbles");
    assert_eq!(app.productivity().coins, 10);
}
