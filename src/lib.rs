//! Conway's Game of Life on a toroidal grid.
//!
//! The engine owns all cell state behind a narrow API; hosts drive it by
//! calling its operations and querying cells back. Randomness is always
//! injected so runs can be made reproducible.

pub mod config;
pub mod engine;
pub mod sim;
pub mod utils;

pub use config::Settings;
pub use engine::{EngineError, Grid};
pub use sim::Simulation;

/// Run a configured simulation to completion and return the final grid
pub fn run_simulation(settings: Settings) -> anyhow::Result<Grid> {
    settings.validate()?;
    let generations = settings.run.generations;
    let mut simulation = Simulation::new(settings);
    simulation.run(generations);
    Ok(simulation.into_grid())
}
