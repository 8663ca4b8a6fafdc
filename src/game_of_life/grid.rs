//! Grid representation and utilities for Game of Life

use super::error::GridError;
use itertools::iproduct;
use std::fmt;

/// State of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// True for `Cell::Alive`
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Character used for this cell in grid files and console output
    pub fn symbol(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }

    /// Parse a grid file character; only `#` and `.` are cells
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::Alive),
            '.' => Some(Cell::Dead),
            _ => None,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// A rectangular Game of Life grid stored row-major in a single buffer.
///
/// The outermost ring of rows and columns is the border. Generations only
/// ever compute interior cells; the engine keeps the border dead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate an all-dead grid.
    ///
    /// Zero sizes, a cell count that overflows `usize`, and buffers the
    /// allocator refuses are all reported as `InvalidDimensions`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let count = Self::cell_count(width, height)?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(count)
            .map_err(|_| Self::invalid_dimensions(width, height))?;
        cells.resize(count, Cell::Dead);

        Ok(Self { width, height, cells })
    }

    /// Build a grid from cells already laid out row by row
    pub(crate) fn from_row_major(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        let count = Self::cell_count(width, height)?;
        if cells.len() != count {
            return Err(GridError::UnexpectedEndOfInput {
                row: cells.len() / width,
                col: cells.len() % width,
            });
        }

        Ok(Self { width, height, cells })
    }

    /// Number of cells in a `width` x `height` grid
    pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize, GridError> {
        match width.checked_mul(height) {
            Some(count) if count > 0 => Ok(count),
            _ => Err(Self::invalid_dimensions(width, height)),
        }
    }

    fn invalid_dimensions(width: usize, height: usize) -> GridError {
        GridError::InvalidDimensions {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        }
    }

    /// Allocate a grid with the same dimensions as `other`
    pub fn with_dimensions_of(other: &Grid) -> Self {
        Self {
            width: other.width,
            height: other.height,
            cells: vec![Cell::Dead; other.cells.len()],
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        let mut grid = Self::new(width, height)?;

        for (row, values) in cells.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RowLengthMismatch {
                    row,
                    found: values.len(),
                    expected: width,
                });
            }
            for (col, alive) in values.into_iter().enumerate() {
                let idx = grid.index(row, col);
                grid.cells[idx] = Cell::from(alive);
            }
        }

        Ok(grid)
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Get cell value at coordinates, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        if !self.in_bounds(row, col) {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Whether `(row, col)` lies strictly inside the border
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row >= 1 && col >= 1 && row + 1 < self.height && col + 1 < self.width
    }

    fn is_border(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && !self.is_interior(row, col)
    }

    /// Count living cells among the eight surrounding `(row, col)`.
    ///
    /// The centre cell is never counted. Positions outside the grid count
    /// as dead, so any coordinate is safe to pass.
    pub fn count_neighbours(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter_map(|(dr, dc)| Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?)))
            .filter(|&(r, c)| self.get(r, c).is_some_and(Cell::is_alive))
            .count() as u8
    }

    /// Mutable row-major view of every cell
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.cells[self.index(row, col)].is_alive())
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// True when every cell on the outermost ring is dead
    pub fn has_dead_border(&self) -> bool {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.is_border(row, col))
            .all(|(row, col)| !self.cells[self.index(row, col)].is_alive())
    }

    /// Kill every cell on the outermost ring
    pub fn clear_border(&mut self) {
        for (row, col) in iproduct!(0..self.height, 0..self.width) {
            if self.is_border(row, col) {
                let idx = self.index(row, col);
                self.cells[idx] = Cell::Dead;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
