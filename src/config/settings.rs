//! Configuration settings for the simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    pub impulse: ImpulseConfig,
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Probability that a cell starts alive
    pub probability: f64,
    /// Fixed RNG seed for reproducible runs; omit for OS entropy
    pub rng_seed: Option<u64>,
}

/// Periodic randomized disturbance applied while the simulation runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImpulseConfig {
    pub enabled: bool,
    /// Probability that any one cell is flipped by an impulse
    pub strength: f64,
    /// Generations between impulses
    pub period: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub generations: u64,
    /// Delay between displayed frames in milliseconds; 0 for no delay
    pub tick_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Where to write the final state; omit to skip the snapshot
    pub snapshot_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                width: 35,
                height: 35,
            },
            seed: SeedConfig {
                probability: 0.2,
                rng_seed: None,
            },
            impulse: ImpulseConfig {
                enabled: false,
                strength: 0.05,
                period: 10,
            },
            run: RunConfig {
                generations: 100,
                tick_ms: 100,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                snapshot_file: None,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.seed.probability) {
            anyhow::bail!(
                "Seed probability must be within [0, 1], got {}",
                self.seed.probability
            );
        }

        if !(0.0..=1.0).contains(&self.impulse.strength) {
            anyhow::bail!(
                "Impulse strength must be within [0, 1], got {}",
                self.impulse.strength
            );
        }

        if self.impulse.enabled && self.impulse.period == 0 {
            anyhow::bail!("Impulse period must be at least 1 generation");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.grid.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.grid.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.run.generations = generations;
        }
        if let Some(density) = cli_overrides.density {
            self.seed.probability = density;
        }
        if let Some(rng_seed) = cli_overrides.rng_seed {
            self.seed.rng_seed = Some(rng_seed);
        }
        if let Some(ref snapshot_file) = cli_overrides.snapshot_file {
            self.output.snapshot_file = Some(snapshot_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<u64>,
    pub density: Option<f64>,
    pub rng_seed: Option<u64>,
    pub snapshot_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_original_host() {
        let settings = Settings::default();
        assert_eq!(settings.grid.width, 35);
        assert_eq!(settings.grid.height, 35);
        assert_eq!(settings.seed.probability, 0.2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_probabilities() {
        let mut settings = Settings::default();
        settings.seed.probability = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.impulse.strength = -0.1;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.impulse.enabled = true;
        settings.impulse.period = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            width: Some(80),
            generations: Some(500),
            density: Some(0.35),
            rng_seed: Some(7),
            ..Default::default()
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.grid.width, 80);
        assert_eq!(settings.grid.height, 35);
        assert_eq!(settings.run.generations, 500);
        assert_eq!(settings.seed.probability, 0.35);
        assert_eq!(settings.seed.rng_seed, Some(7));
    }

    #[test]
    fn test_yaml_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/settings.yaml");

        let mut settings = Settings::default();
        settings.impulse.enabled = true;
        settings.impulse.strength = 0.1;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert!(loaded.impulse.enabled);
        assert_eq!(loaded.impulse.strength, 0.1);
        assert_eq!(loaded.grid.width, settings.grid.width);
    }
}
