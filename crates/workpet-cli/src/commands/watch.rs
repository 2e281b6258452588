//! Fixed-period polling loop.
//!
//! This is the explicit replacement for the implicit interval timers the
//! engines would otherwise need: one loop, a documented period (60 s unless
//! configured), torn down when the process exits. Each pass ticks both
//! engines; a pass that changed nothing prints nothing.

use std::time::Duration;

use workpet_core::App;

pub fn run(period_secs: Option<u64>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;
    let period = period_secs.unwrap_or(app.config().tick_period_secs).max(1);
    eprintln!("watching (tick every {period}s, ctrl-c to stop)");

    loop {
        for event in app.tick() {
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        std::thread::sleep(Duration::from_secs(period));
    }
}
