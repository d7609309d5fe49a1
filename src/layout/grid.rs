//! Row-major placement of samples into a fixed-column grid
//!
//! The plan only stores sample indices; callers keep ownership of the
//! samples and resolve indices when drawing.

use crate::io::error::{Result, invalid_parameter};

/// What a grid slot shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent {
    /// Index into the planned sample sequence
    Occupied(usize),
    /// Deliberately blank slot
    Hidden,
}

/// One addressable slot of a laid-out grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
    /// Sample shown in the slot, if any
    pub content: CellContent,
}

impl GridCell {
    /// Index of the sample shown in this cell
    pub const fn sample_index(&self) -> Option<usize> {
        match self.content {
            CellContent::Occupied(index) => Some(index),
            CellContent::Hidden => None,
        }
    }

    /// Whether the cell is blank
    pub const fn is_hidden(&self) -> bool {
        matches!(self.content, CellContent::Hidden)
    }
}

/// Flat grid layout: every row has `columns` cells, in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPlan {
    rows: usize,
    columns: usize,
    cells: Vec<GridCell>,
}

impl GridPlan {
    /// Number of rows, `ceil(samples / columns)`
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// All `rows * columns` cells in row-major order
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cell at the given position
    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        if col >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + col)
    }

    /// Occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| !cell.is_hidden())
    }

    /// Number of blank cells
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_hidden()).count()
    }
}

/// Lay `samples` out row-major over `columns` columns
///
/// Cell `(r, c)` holds sample `r * columns + c` when it exists; the tail of
/// the last row is hidden. A single row is still a two-dimensional plan, and
/// an empty input yields zero rows.
///
/// # Errors
///
/// Returns an error if `columns` is zero
pub fn plan<T>(samples: &[T], columns: usize) -> Result<GridPlan> {
    plan_count(samples.len(), columns)
}

/// Same as [`plan`] for a known sample count
///
/// # Errors
///
/// Returns an error if `columns` is zero
pub fn plan_count(count: usize, columns: usize) -> Result<GridPlan> {
    if columns == 0 {
        return Err(invalid_parameter(
            "columns",
            &columns,
            &"grid needs at least one column",
        ));
    }

    let rows = count.div_ceil(columns);
    let cells = (0..rows * columns)
        .map(|index| GridCell {
            row: index / columns,
            col: index % columns,
            content: if index < count {
                CellContent::Occupied(index)
            } else {
                CellContent::Hidden
            },
        })
        .collect();

    Ok(GridPlan {
        rows,
        columns,
        cells,
    })
}
