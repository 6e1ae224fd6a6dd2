use prio_heap::triage::{run, TriageConfig};
use std::env;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let config = TriageConfig::from_args(env::args().skip(1))?;
    log::debug!("configuration: {:?}", config);

    let stdout = io::stdout();
    let waiting = run(&config, &mut stdout.lock())?;
    if waiting > 0 {
        println!("{} cases still waiting", waiting);
    }

    Ok(())
}
