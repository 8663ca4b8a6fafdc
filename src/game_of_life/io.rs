//! File I/O operations for Game of Life grids
//!
//! Grid files look like this:
//!
//! ```text
//! 4        <- width as decimal integer
//! 3        <- height as decimal integer
//! ....     <- `height` rows of `width` cells (. = dead, # = alive)
//! .##.
//! ....     <- every row ends with '\n'
//! ```

use super::error::GridError;
use super::grid::{Cell, Grid};
use std::path::Path;
use std::str::Chars;
use tracing::{debug, warn};

/// Load a grid from a text file
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid, GridError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => GridError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => GridError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let grid = parse_grid_from_string(&content)?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        living = grid.living_count(),
        "loaded grid"
    );
    if !grid.has_dead_border() {
        warn!(
            path = %path.display(),
            "grid has living border cells; the border is never evolved and dies after the first generation"
        );
    }
    Ok(grid)
}

/// Parse a grid from its text representation.
///
/// Cells are collected from the input before the grid is built, so the
/// declared dimensions never cause an allocation larger than the input.
pub fn parse_grid_from_string(content: &str) -> Result<Grid, GridError> {
    let mut rest = content;
    let width = read_header_line(&mut rest, "width", 1)?;
    let height = read_header_line(&mut rest, "height", 2)?;

    let invalid = || GridError::InvalidDimensions { width, height };
    let width = usize::try_from(width).map_err(|_| invalid())?;
    let height = usize::try_from(height).map_err(|_| invalid())?;
    let count = Grid::cell_count(width, height).map_err(|_| invalid())?;

    let mut cells = Vec::with_capacity(count.min(rest.len()));
    let mut chars = rest.chars();

    for row in 0..height {
        read_row(&mut chars, &mut cells, width, row)?;
    }

    Grid::from_row_major(width, height, cells)
}

fn read_header_line(rest: &mut &str, field: &'static str, line: usize) -> Result<i64, GridError> {
    let malformed = |found: &str| GridError::MalformedHeader {
        field,
        line,
        found: found.to_string(),
    };

    let current = *rest;
    let (text, remainder) = current.split_once('\n').ok_or_else(|| malformed(current.trim()))?;
    let value = text.trim().parse::<i64>().map_err(|_| malformed(text.trim()))?;

    *rest = remainder;
    Ok(value)
}

fn read_row(chars: &mut Chars<'_>, cells: &mut Vec<Cell>, width: usize, row: usize) -> Result<(), GridError> {
    for col in 0..width {
        let ch = match chars.next() {
            // A line break inside a row means the row ran out of cells
            None | Some('\n') => return Err(GridError::UnexpectedEndOfInput { row, col }),
            Some(ch) => ch,
        };
        let cell = Cell::from_symbol(ch).ok_or(GridError::InvalidCellCharacter { row, col, found: ch })?;
        cells.push(cell);
    }

    match chars.next() {
        Some('\n') => Ok(()),
        found => Err(GridError::MissingRowTerminator { row, found }),
    }
}

/// Render a grid as `height` lines of `width` cells
pub fn render(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height() * (grid.width() + 1));

    for row in grid.rows() {
        result.extend(row.iter().map(|cell| cell.symbol()));
        result.push('\n');
    }

    result
}

/// Convert a grid to the full file representation, header included
pub fn grid_to_string(grid: &Grid) -> String {
    format!("{}\n{}\n{}", grid.width(), grid.height(), render(grid))
}

/// Save a grid to a text file
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<(), GridError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| GridError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_error)?;
    }
    std::fs::write(path, grid_to_string(grid)).map_err(io_error)?;

    Ok(())
}

/// Create example grid files for testing
pub fn create_example_grids<P: AsRef<Path>>(output_dir: P) -> Result<(), GridError> {
    let dir = output_dir.as_ref();

    let patterns = [
        ("block.txt", "4\n4\n....\n.##.\n.##.\n....\n"),
        ("blinker.txt", "5\n5\n.....\n.....\n.###.\n.....\n.....\n"),
        (
            "glider.txt",
            "8\n8\n........\n..#.....\n...#....\n.###....\n........\n........\n........\n........\n",
        ),
        ("beacon.txt", "6\n6\n......\n.##...\n.##...\n...##.\n...##.\n......\n"),
    ];

    for (name, content) in patterns {
        let grid = parse_grid_from_string(content)?;
        save_grid_to_file(&grid, dir.join(name))?;
    }

    Ok(())
}
