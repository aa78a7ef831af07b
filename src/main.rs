//! Terminal host for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_sim::{
    config::{CliOverrides, OutputFormat, Settings},
    engine::{create_example_patterns, load_grid_from_file, save_grid_to_file, Grid, Snapshot},
    sim::Simulation,
    utils::{ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_sim")]
#[command(about = "Toroidal Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation, printing each generation
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Pattern file to start from instead of a random seed
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Initial live-cell density in [0, 1] (overrides config)
        #[arg(short, long)]
        density: Option<f64>,

        /// RNG seed for a reproducible run (overrides config)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Where to write the final state (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only print the final generation
        #[arg(short, long)]
        quiet: bool,
    },

    /// Advance a pattern a fixed number of generations, deterministically
    Step {
        /// Pattern file to load
        #[arg(short, long)]
        pattern: PathBuf,

        /// Number of generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: u64,

        /// Where to write the resulting pattern
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            width,
            height,
            generations,
            density,
            seed,
            output,
            quiet,
        } => run_command(
            config,
            pattern,
            CliOverrides {
                width,
                height,
                generations,
                density,
                rng_seed: seed,
                snapshot_file: output,
            },
            quiet,
        ),
        Commands::Step {
            pattern,
            generations,
            output,
        } => step_command(pattern, generations, output),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(
    config_path: PathBuf,
    pattern: Option<PathBuf>,
    overrides: CliOverrides,
    quiet: bool,
) -> Result<()> {
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(&overrides);
    settings.validate().context("Configuration validation failed")?;

    let generations = settings.run.generations;
    let tick = Duration::from_millis(settings.run.tick_ms);

    let mut simulation = match pattern {
        Some(path) => {
            let grid = load_grid_from_file(&path)
                .with_context(|| format!("Failed to load pattern from {}", path.display()))?;
            Simulation::from_grid(settings.clone(), grid)
        }
        None => Simulation::new(settings.clone()),
    };

    if !quiet {
        println!("{}", GridFormatter::summary(simulation.grid(), 0));
        println!("{}", GridFormatter::compact(simulation.grid()));
    }

    for _ in 0..generations {
        simulation.tick();

        if !quiet {
            if !tick.is_zero() {
                std::thread::sleep(tick);
            }
            println!("{}", GridFormatter::summary(simulation.grid(), simulation.generation()));
            println!("{}", GridFormatter::compact(simulation.grid()));
        }
    }

    println!(
        "{}",
        ColorOutput::success(&GridFormatter::summary(
            simulation.grid(),
            simulation.generation()
        ))
    );
    if quiet {
        println!("{}", GridFormatter::compact(simulation.grid()));
    }

    write_snapshot(simulation.grid(), &settings)?;
    Ok(())
}

fn write_snapshot(grid: &Grid, settings: &Settings) -> Result<()> {
    let Some(ref path) = settings.output.snapshot_file else {
        return Ok(());
    };

    match settings.output.format {
        OutputFormat::Text => save_grid_to_file(grid, path)?,
        OutputFormat::Json => Snapshot::from_grid(grid).save_to_file(path)?,
        OutputFormat::Visual => {
            let content = GridFormatter::with_coords(grid);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
        }
    }

    println!(
        "{}",
        ColorOutput::info(&format!("Final state written to {}", path.display()))
    );
    Ok(())
}

fn step_command(pattern: PathBuf, generations: u64, output: Option<PathBuf>) -> Result<()> {
    let mut grid = load_grid_from_file(&pattern)
        .with_context(|| format!("Failed to load pattern from {}", pattern.display()))?;

    for _ in 0..generations {
        grid.step();
    }

    println!(
        "{} after {} generation(s):",
        pattern.display(),
        generations
    );
    println!("{}", GridFormatter::compact(&grid));

    if let Some(path) = output {
        save_grid_to_file(&grid, &path)
            .with_context(|| format!("Failed to save result to {}", path.display()))?;
        println!(
            "{}",
            ColorOutput::success(&format!("Result saved to {}", path.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");
    println!("3. Or step a pattern: cargo run -- step --pattern patterns/glider.txt -g 4");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_sim",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--seed",
            "42",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["game_of_life_sim", "step", "--pattern", "glider.txt"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());
    }

    #[test]
    fn test_step_command_round_trip() {
        let temp_dir = tempdir().unwrap();
        let pattern_path = temp_dir.path().join("blinker.txt");
        let output_path = temp_dir.path().join("stepped.txt");
        std::fs::write(&pattern_path, "00000\n00000\n01110\n00000\n00000\n").unwrap();

        // Two generations bring a blinker back to its starting phase
        step_command(pattern_path.clone(), 2, Some(output_path.clone())).unwrap();

        let original = load_grid_from_file(&pattern_path).unwrap();
        let stepped = load_grid_from_file(&output_path).unwrap();
        assert_eq!(original, stepped);
    }
}
