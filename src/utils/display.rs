//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{render, Cell, Grid};
use anyhow::Result;
use serde::Serialize;

const ALIVE_HIGHLIGHT: &str = "\x1b[1;31m#\x1b[0m";

/// Formats grids as console frames
#[derive(Debug, Clone, Copy)]
pub struct FrameFormatter {
    format: OutputFormat,
    color: bool,
}

/// One generation as emitted in JSON output
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    pub generation: usize,
    pub width: usize,
    pub height: usize,
    pub living_cells: usize,
    pub rows: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
}

impl<'a> Frame<'a> {
    pub fn new(generation: usize, grid: &Grid, label: Option<&'a str>) -> Self {
        Self {
            generation,
            width: grid.width(),
            height: grid.height(),
            living_cells: grid.living_count(),
            rows: render(grid).lines().map(str::to_string).collect(),
            label,
        }
    }
}

impl FrameFormatter {
    /// Formatter for `format`, highlighting living cells when `color` is set
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Format the grid loaded from disk, before any generation ran.
    ///
    /// Like every frame, the result ends with exactly one newline.
    pub fn format_initial(&self, grid: &Grid) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(format!("Initial grid:\n{}", self.format_grid(grid))),
            OutputFormat::Json => Self::json_line(&Frame::new(0, grid, Some("initial"))),
        }
    }

    /// Format generation number `generation` (counting from 1)
    pub fn format_generation(&self, generation: usize, grid: &Grid) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(format!("{}. Generation:\n{}", generation, self.format_grid(grid))),
            OutputFormat::Json => Self::json_line(&Frame::new(generation, grid, None)),
        }
    }

    fn json_line(frame: &Frame<'_>) -> Result<String> {
        let mut line = serde_json::to_string(frame)?;
        line.push('\n');
        Ok(line)
    }

    /// Render the grid, highlighting living cells when colour is enabled
    pub fn format_grid(&self, grid: &Grid) -> String {
        if !self.color {
            return render(grid);
        }

        let mut output = String::new();
        for row in grid.rows() {
            for &cell in row {
                match cell {
                    Cell::Alive => output.push_str(ALIVE_HIGHLIGHT),
                    Cell::Dead => output.push(cell.symbol()),
                }
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for x in 0..grid.width() {
            output.push_str(&format!("{}", x % 10));
        }
        output.push('\n');

        for (y, row) in grid.rows().enumerate() {
            output.push_str(&format!("{:2} ", y));
            output.extend(row.iter().map(|cell| cell.symbol()));
            output.push('\n');
        }

        output
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

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

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
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
