//! Orchestration of repeated generation steps

pub mod runner;

pub use runner::Simulation;
