use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "workpet-cli", version, about = "Workpet CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pet care
    Pet {
        #[command(subcommand)]
        action: commands::pet::PetAction,
    },
    /// Work session control
    Work {
        #[command(subcommand)]
        action: commands::work::WorkAction,
    },
    /// Coin balance and spending
    Coins {
        #[command(subcommand)]
        action: commands::coins::CoinsAction,
    },
    /// Work statistics (today vs all time)
    Stats,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Poll both engines on a fixed period, printing events
    Watch {
        /// Override the configured tick period
        #[arg(long)]
        period_secs: Option<u64>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Pet { action } => commands::pet::run(action),
        Commands::Work { action } => commands::work::run(action),
        Commands::Coins { action } => commands::coins::run(action),
        Commands::Stats => commands::stats::run(),
        Commands::Config { action } => commands::config::run(action),
        Commands::Watch { period_secs } => commands::watch::run(period_secs),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
