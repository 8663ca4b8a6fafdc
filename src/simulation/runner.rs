//! Double-buffered generation loop

use crate::game_of_life::{advance_generation, Grid, GridError, Rule};
use std::time::Duration;
use tracing::{debug, info};

/// Drives a grid through successive generations.
///
/// Owns two buffers of equal size. Each step writes the next generation
/// into the spare buffer and then swaps the two, so no cell data is copied.
pub struct Simulation<R: Rule> {
    current: Grid,
    next: Grid,
    rule: R,
    generation: usize,
}

impl<R: Rule> Simulation<R> {
    /// Start a simulation from `initial` under `rule`
    pub fn new(initial: Grid, rule: R) -> Self {
        let next = Grid::with_dimensions_of(&initial);
        info!(
            width = initial.width(),
            height = initial.height(),
            rule = rule.name(),
            "starting simulation"
        );
        Self {
            current: initial,
            next,
            rule,
            generation: 0,
        }
    }

    /// The grid for the most recent generation
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Number of generations computed so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Advance one generation and return the new grid
    pub fn step(&mut self) -> Result<&Grid, GridError> {
        advance_generation(&self.current, &mut self.next, &self.rule)?;
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        debug!(
            generation = self.generation,
            living = self.current.living_count(),
            "advanced generation"
        );
        Ok(&self.current)
    }

    /// Run `generations` steps, handing each new grid to `on_frame`.
    ///
    /// Frames are numbered from 1. `delay` is slept after every frame except
    /// the last; a zero delay never sleeps.
    pub fn run<F>(&mut self, generations: usize, delay: Duration, mut on_frame: F) -> Result<(), GridError>
    where
        F: FnMut(usize, &Grid),
    {
        for frame in 1..=generations {
            self.step()?;
            on_frame(frame, &self.current);

            if frame < generations && !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }
        Ok(())
    }

    /// Consume the simulation and return the latest grid
    pub fn into_grid(self) -> Grid {
        self.current
    }
}
