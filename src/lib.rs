//! Console Game of Life
//!
//! Loads a grid from a text file and evolves it generation by generation
//! under Conway's rule or an alternate variant.

pub mod config;
pub mod game_of_life;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Grid, GridError, Rule, RuleKind};
pub use simulation::Simulation;

use anyhow::{Context, Result};

/// Load the configured grid and evolve it for the configured number of generations
pub fn simulate(settings: &Settings) -> Result<Grid> {
    let path = settings
        .input
        .grid_file
        .as_ref()
        .context("No grid file given")?;
    let grid = game_of_life::load_grid_from_file(path)?;

    let mut simulation = Simulation::new(grid, settings.simulation.rule);
    simulation.run(settings.simulation.generations, std::time::Duration::ZERO, |_, _| {})?;
    Ok(simulation.into_grid())
}
