//! End-to-end pet-care scenarios over a real (in-memory) database.

use chrono::{Duration, Utc};
use workpet_core::storage::database::PET_STATE_KEY;
use workpet_core::{App, CareAction, Config, Database, Event, PetState};

fn fresh_app() -> App {
    App::with_database(Database::open_memory().unwrap(), Config::default())
}

#[test]
fn fresh_load_has_default_pet() {
    let app = fresh_app();
    let pet = app.pet();
    assert_eq!(pet.name, "Buddy");
    assert_eq!(pet.hunger, 50.0);
    assert_eq!(pet.happiness, 50.0);
    assert_eq!(pet.energy, 50.0);
}

#[test]
fn care_charges_coins_and_persists() {
    let mut app = fresh_app();
    let event = app.feed().expect("50 starting coins cover the feed cost");
    match event {
        Event::CareApplied {
            action,
            cost,
            hunger,
            ..
        } => {
            assert_eq!(action, CareAction::Feed);
            assert_eq!(cost, 10);
            assert_eq!(hunger, 70.0);
        }
        other => panic!("expected CareApplied, got {other:?}"),
    }
    assert_eq!(app.productivity().coins, 40);
    assert_eq!(app.pet().hunger, 70.0);
}

#[test]
fn broke_owner_cannot_feed() {
    let mut app = fresh_app();
    // Burn the balance down to 5 coins: feed(10) x3, rest(5) x3.
    for _ in 0..3 {
        assert!(app.feed().is_some());
        assert!(app.rest().is_some());
    }
    assert_eq!(app.productivity().coins, 5);

    let before = app.pet().clone();
    assert!(app.feed().is_none());
    assert_eq!(app.productivity().coins, 5);
    assert_eq!(*app.pet(), before);

    // Rest costs 5 and still goes through.
    assert!(app.rest().is_some());
    assert_eq!(app.productivity().coins, 0);
}

#[test]
fn decay_lands_before_action_deltas() {
    let db = Database::open_memory().unwrap();
    let mut pet = PetState::new("Buddy", Utc::now() - Duration::minutes(3));
    pet.hunger = 50.0;
    db.save_pet_state(&pet);

    let mut app = App::with_database(db, Config::default());
    app.feed().expect("spend succeeds");
    // 3 whole minutes of decay (1.5) applied before the +20 delta.
    assert_eq!(app.pet().hunger, 50.0 - 1.5 + 20.0);
    assert_eq!(app.pet().happiness, 50.0 - 0.9 + 5.0);
    assert_eq!(app.pet().energy, 50.0 - 0.6 - 2.0);
}

#[test]
fn reset_is_free_and_persisted() {
    let mut app = fresh_app();
    app.play();
    assert_ne!(app.pet().happiness, 50.0);
    let coins_before = app.productivity().coins;

    app.reset_pet();
    assert_eq!(app.pet().hunger, 50.0);
    assert_eq!(app.pet().happiness, 50.0);
    assert_eq!(app.pet().energy, 50.0);
    assert_eq!(app.productivity().coins, coins_before);
}

#[test]
fn tick_decays_idle_pet_and_persists_on_change() {
    let db = Database::open_memory().unwrap();
    let pet = PetState::new("Buddy", Utc::now() - Duration::minutes(10));
    db.save_pet_state(&pet);

    let mut app = App::with_database(db, Config::default());
    let events = app.tick();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Event::PetDecayed { elapsed_min: 10, .. }));
    assert_eq!(app.pet().hunger, 45.0);

    // Nothing accrued since the decay fired: no events, no writes.
    assert!(app.tick().is_empty());
}

#[test]
fn corrupt_pet_slot_recovers_to_default() {
    let db = Database::open_memory().unwrap();
    db.kv_set(PET_STATE_KEY, "][ definitely not json").unwrap();
    let app = App::with_database(db, Config::default());
    assert_eq!(app.pet().hunger, 50.0);
}
