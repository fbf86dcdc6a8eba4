//! Scenario simulator: a stand-in dashboard host for the long-press card.
//!
//! Loads a scenario file, runs it on the virtual-time host and prints every
//! host-visible effect as one JSON object per line, followed by the card's
//! final render tree.
//!
//! ```text
//! long-press-sim demos/hold-to-call-service.toml
//! ```
//!
//! Output:
//!
//! ```text
//! {"at_ms":0,"effect":"timer_set","id":1,"delay_ms":300}
//! {"at_ms":300,"effect":"timer_fired","id":1}
//! {"at_ms":300,"effect":"service_call","domain":"light","service":"turn_on",...}
//! <long-press style="...">...</long-press>
//! ```

#![allow(clippy::multiple_crate_versions)]

use long_press::runtime::{self, Scenario, Simulation};
use long_press::{LongPressError, Settings};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

fn run(path: &Path) -> long_press::Result<()> {
    let scenario = Scenario::from_path(path)?;
    let settings = Settings::from_map(&scenario.settings);
    long_press::observability::init_tracing(&settings);

    let span = tracing::debug_span!("simulate", scenario = %path.display());
    let _guard = span.entered();

    let mut sim = Simulation::new(scenario.card, scenario.bounds, scenario.dialog)?;
    sim.run(&scenario.steps)?;
    if let Some(end_ms) = scenario.end_ms {
        sim.advance_to(Duration::from_millis(end_ms));
    }

    for record in sim.take_effects() {
        println!("{}", serde_json::to_string(&record)?);
    }
    println!("{}", sim.card().render());

    tracing::debug!(now_ms = runtime::millis(sim.now()), "simulation finished");
    Ok(())
}

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: long-press-sim <scenario.json|scenario.toml>");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(LongPressError::Io(e)) => {
            eprintln!("cannot read {}: {e}", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
