use clap::Subcommand;
use workpet_core::{App, CareAction};

#[derive(Subcommand)]
pub enum PetAction {
    /// Feed the pet (10 coins)
    Feed,
    /// Play with the pet (15 coins)
    Play,
    /// Let the pet rest (5 coins)
    Rest,
    /// Reset the pet to its default state (free)
    Reset,
    /// Print the current pet record as JSON
    Status,
    /// Apply pending decay once
    Tick,
}

/// Advisory gates from the care contract. The engine never rejects these;
/// the presentation layer is expected to.
fn advisory_block(app: &App, action: CareAction) -> Option<&'static str> {
    let pet = app.pet();
    match action {
        CareAction::Feed if pet.hunger >= 95.0 => Some("pet is already full"),
        CareAction::Play if pet.energy < 10.0 => Some("pet is too tired to play"),
        CareAction::Rest if pet.energy >= 95.0 => Some("pet is fully rested"),
        _ => None,
    }
}

fn care(app: &mut App, action: CareAction) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(reason) = advisory_block(app, action) {
        eprintln!("skipped {}: {reason}", action.label());
        return Ok(());
    }
    match app.care(action) {
        Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
        None => eprintln!(
            "not enough coins to {} (cost {}, balance {})",
            action.label(),
            action.cost(),
            app.productivity().coins
        ),
    }
    Ok(())
}

pub fn run(action: PetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        PetAction::Feed => care(&mut app, CareAction::Feed)?,
        PetAction::Play => care(&mut app, CareAction::Play)?,
        PetAction::Rest => care(&mut app, CareAction::Rest)?,
        PetAction::Reset => {
            let event = app.reset_pet();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        PetAction::Status => {
            println!("{}", serde_json::to_string_pretty(app.pet())?);
        }
        PetAction::Tick => {
            for event in app.tick() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }
    Ok(())
}
