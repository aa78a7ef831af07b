//! Snapshot I/O for grids.
//!
//! The grid itself performs no file I/O; these free functions let a host
//! persist and restore board state. The text format is one line per row,
//! '1' for a live cell and '0' for a dead one.

use super::Grid;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Load a grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid from its text representation
pub fn parse_grid(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Grid file is empty or contains no valid rows");
    }

    let mut rows = Vec::with_capacity(lines.len());
    for (y, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    x,
                    y
                ),
            }
        }
        rows.push(row);
    }

    Grid::from_rows(rows).context("Grid rows are inconsistent")
}

/// Render a grid to its text representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let alive = grid.get(x, y).expect("coordinate within grid bounds");
            result.push(if alive { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Save a grid to a text file, creating parent directories as needed
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// A serializable dump of a grid's dimensions and cell matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Snapshot {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut cells = Vec::with_capacity(grid.width() * grid.height());
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                cells.push(grid.get(x, y).expect("coordinate within grid bounds"));
            }
        }
        Self {
            width: grid.width(),
            height: grid.height(),
            cells,
        }
    }

    pub fn into_grid(self) -> Result<Grid> {
        Grid::with_cells(self.width, self.height, self.cells)
            .context("Snapshot cell matrix does not match its dimensions")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = self.to_json().context("Failed to serialize snapshot")?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write snapshot: {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot: {}", path.as_ref().display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse snapshot: {}", path.as_ref().display()))
    }
}

/// Write the bundled example patterns into a directory
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content).context("Failed to write glider.txt")?;

    let blinker_content = "00000\n00000\n01110\n00000\n00000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content).context("Failed to write block.txt")?;

    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content).context("Failed to write beacon.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_grid() {
        let content = "010\n101\n010\n";
        let grid = parse_grid(content).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.live_count(), 4);
        assert!(grid.get(1, 0).unwrap());
        assert!(grid.get(0, 1).unwrap());
        assert!(grid.get(2, 1).unwrap());
        assert!(grid.get(1, 2).unwrap());
    }

    #[test]
    fn test_round_trip() {
        let content = "010\n101\n010\n";
        let grid = parse_grid(content).unwrap();
        assert_eq!(grid_to_string(&grid), content);
    }

    #[test]
    fn test_invalid_input() {
        // Invalid character
        assert!(parse_grid("010\n1X1\n010\n").is_err());

        // Ragged rows
        assert!(parse_grid("010\n11\n010\n").is_err());

        // Empty content
        assert!(parse_grid("").is_err());
        assert!(parse_grid("\n  \n").is_err());
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("patterns/test_grid.txt");

        let mut grid = Grid::new(3, 2);
        grid.toggle(0, 0).unwrap();
        grid.toggle(2, 0).unwrap();
        grid.toggle(1, 1).unwrap();

        save_grid_to_file(&grid, &file_path).unwrap();
        let loaded = load_grid_from_file(&file_path).unwrap();

        assert_eq!(grid, loaded);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let mut grid = Grid::new(4, 3);
        grid.toggle(1, 1).unwrap();
        grid.toggle(3, 2).unwrap();

        let snapshot = Snapshot::from_grid(&grid);
        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap().into_grid().unwrap();

        assert_eq!(grid, restored);
    }

    #[test]
    fn test_snapshot_rejects_inconsistent_dimensions() {
        let snapshot = Snapshot {
            width: 3,
            height: 3,
            cells: vec![false; 7],
        };
        assert!(snapshot.into_grid().is_err());
    }

    #[test]
    fn test_snapshot_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("state.json");

        let mut grid = Grid::new(5, 5);
        grid.toggle(2, 2).unwrap();
        Snapshot::from_grid(&grid).save_to_file(&path).unwrap();

        let restored = Snapshot::load_from_file(&path).unwrap().into_grid().unwrap();
        assert_eq!(grid, restored);
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_grid_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.width(), 5);
        assert_eq!(glider.height(), 5);
        assert_eq!(glider.live_count(), 5);
    }
}
