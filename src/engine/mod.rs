//! Game of Life core engine

pub mod grid;
pub mod io;
pub mod rules;

pub use grid::{EngineError, Grid, GridShapeError};
pub use io::{create_example_patterns, load_grid_from_file, save_grid_to_file, Snapshot};
pub use rules::LifeRules;
