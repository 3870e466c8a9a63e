//! Runs the theorem development and prints the proof transcript.
//!
//! One line per recorded fact, axioms first; `RUST_LOG=info` adds phase
//! logging around the transcript.

use log::{error, info};
use tarskian_geometry::{develop, Axioms};
use tarskian_proof::Engine;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("development failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let axioms = Axioms::new()?;
    let mut engine = Engine::new(axioms.bundle())?;
    info!("axiom bundle recorded");
    let book = develop(&mut engine, &axioms)?;
    info!("development complete, closing fact: {:?}", book.null_segment);
    Ok(())
}
