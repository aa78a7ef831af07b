//! Display and output formatting utilities

use crate::engine::Grid;

/// Format grids for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn compact(grid: &Grid) -> String {
        let mut output = String::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let alive = grid.get(x, y).expect("coordinate within grid bounds");
                output.push(if alive { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column numbers
    pub fn with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{:2}", x % 10));
        }
        output.push('\n');

        for y in 0..grid.height() {
            output.push_str(&format!("{:2} ", y));
            for x in 0..grid.width() {
                let alive = grid.get(x, y).expect("coordinate within grid bounds");
                output.push_str(if alive { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// One-line summary of a grid's population
    pub fn summary(grid: &Grid, generation: u64) -> String {
        let area = grid.width() * grid.height();
        let density = if area > 0 {
            grid.live_count() as f64 / area as f64 * 100.0
        } else {
            0.0
        };
        format!(
            "Generation {} | {}x{} | {} alive ({:.1}%)",
            generation,
            grid.width(),
            grid.height(),
            grid.live_count(),
            density
        )
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}
