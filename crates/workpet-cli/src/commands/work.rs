use clap::Subcommand;
use workpet_core::App;

#[derive(Subcommand)]
pub enum WorkAction {
    /// Start a work session
    Start {
        /// What you are working on
        description: String,
    },
    /// End the active session and collect coins
    End,
    /// Discard the active session without credit
    Cancel,
    /// Print the productivity record as JSON
    Status,
    /// Refresh the active session's live duration
    Tick,
}

pub fn run(action: WorkAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        WorkAction::Start { description } => match app.start_session(&description) {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => {
                if app.productivity().current_session.is_some() {
                    eprintln!("a session is already running; end or cancel it first");
                } else {
                    eprintln!("description must not be empty");
                }
            }
        },
        WorkAction::End => match app.end_session() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => eprintln!("no active session"),
        },
        WorkAction::Cancel => match app.cancel_session() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => eprintln!("no active session"),
        },
        WorkAction::Status => {
            println!("{}", serde_json::to_string_pretty(app.productivity())?);
        }
        WorkAction::Tick => {
            for event in app.tick() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
    }
    Ok(())
}
