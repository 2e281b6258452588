use clap::Subcommand;
use workpet_core::App;

#[derive(Subcommand)]
pub enum CoinsAction {
    /// Print the current balance
    Balance,
    /// Spend coins through the coin gate
    Spend {
        /// Amount to deduct
        amount: u64,
    },
}

pub fn run(action: CoinsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        CoinsAction::Balance => {
            println!("{}", app.productivity().coins);
        }
        CoinsAction::Spend { amount } => {
            if app.spend_coins(amount) {
                println!("{}", app.productivity().coins);
            } else {
                eprintln!(
                    "insufficient coins: balance {}, requested {amount}",
                    app.productivity().coins
                );
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
