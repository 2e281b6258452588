use workpet_core::App;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open()?;
    let stats = app.work_stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
