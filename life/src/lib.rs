// lib.rs - Conway's Game of Life on a walled, fixed-size board

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod pacing;
pub mod patterns;
pub mod render;
pub mod screen;
pub mod seed;
pub mod simulation;
pub mod stability;
pub mod step;

pub use cell::Cell;
pub use config::{Config, Pacing, SeedSource};
pub use error::{LifeError, Result};
pub use grid::Board;
pub use render::{render, render_frame};
pub use simulation::{RunSummary, Simulation, StopReason, DEFAULT_GENERATIONS};
pub use stability::StabilityRule;
pub use step::{step, Stepper};
