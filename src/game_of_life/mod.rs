//! Game of Life core functionality

pub mod engine;
pub mod error;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::{advance_generation, evolve, evolve_generations};
pub use error::GridError;
pub use grid::{Cell, Grid};
pub use io::{create_example_grids, load_grid_from_file, parse_grid_from_string, render, save_grid_to_file};
pub use rules::{AlternateRule, Rule, RuleKind, StandardRule};
