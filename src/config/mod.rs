//! Configuration management for the simulator

pub mod settings;

pub use settings::{
    CliOverrides, GridConfig, ImpulseConfig, OutputConfig, OutputFormat, RunConfig, SeedConfig,
    Settings,
};
