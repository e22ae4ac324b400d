use std::env;

use anyhow::Context;
use log::info;

use ferrite_linreg::{run_demo, RunSpec, StdoutReporter};

// Runs the study-hours demo, or the run described by the JSON file given as
// the only argument:
//   cargo run
//   cargo run -- run.json
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let spec = match env::args().nth(1) {
        Some(path) => RunSpec::load_json(&path).with_context(|| format!("loading run spec {path}"))?,
        None => {
            info!("no run spec given, using the study-hours demo");
            RunSpec::default()
        }
    };

    spec.config.validate()?;

    println!("Starting linear regression...");
    let outcome = run_demo(&spec, &mut StdoutReporter)?;

    println!("Final model: {}", outcome.model);
    println!(
        "Predicted score for {} hours of study: {}",
        outcome.test_input, outcome.prediction
    );

    Ok(())
}
