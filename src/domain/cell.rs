use std::fmt;
use std::ops::Deref;

use super::Grid;

/// Cell is a single addressable location in a grid.
/// Position is fixed when the grid creates it; only the content changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<T> {
    row: usize,
    col: usize,
    value: Option<T>,
}

impl<T> Cell<T> {
    pub(crate) const fn new(row: usize, col: usize, value: Option<T>) -> Self {
        Self { row, col, value }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    /// Alias for `col`
    pub const fn x(&self) -> usize {
        self.col
    }

    /// Alias for `row`
    pub const fn y(&self) -> usize {
        self.row
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    /// Replace the content, returning what was there before
    pub fn set_value(&mut self, value: Option<T>) -> Option<T> {
        std::mem::replace(&mut self.value, value)
    }

    pub fn take_value(&mut self) -> Option<T> {
        self.value.take()
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Borrowed view of a cell together with the grid that owns it.
///
/// Holding a `GridCell` never keeps the grid alive past its owner; the
/// borrow checker ties the view to the grid's lifetime. Neighbor lookups
/// go back through the grid on every call, nothing is cached.
pub struct GridCell<'g, T> {
    grid: &'g Grid<T>,
    cell: &'g Cell<T>,
}

impl<'g, T> GridCell<'g, T> {
    pub(crate) const fn new(grid: &'g Grid<T>, cell: &'g Cell<T>) -> Self {
        Self { grid, cell }
    }

    /// The grid this cell belongs to
    pub const fn grid(&self) -> &'g Grid<T> {
        self.grid
    }

    pub const fn cell(&self) -> &'g Cell<T> {
        self.cell
    }

    /// Content with the lifetime of the grid borrow
    pub fn value(&self) -> Option<&'g T> {
        self.cell.value.as_ref()
    }

    pub fn above(&self) -> Option<Self> {
        let row = self.cell.row.checked_sub(1)?;
        self.grid.try_get_cell(row, self.cell.col)
    }

    pub fn below(&self) -> Option<Self> {
        self.grid.try_get_cell(self.cell.row + 1, self.cell.col)
    }

    pub fn left(&self) -> Option<Self> {
        let col = self.cell.col.checked_sub(1)?;
        self.grid.try_get_cell(self.cell.row, col)
    }

    pub fn right(&self) -> Option<Self> {
        self.grid.try_get_cell(self.cell.row, self.cell.col + 1)
    }

    pub fn has_above(&self) -> bool {
        self.above().is_some()
    }

    pub fn has_below(&self) -> bool {
        self.below().is_some()
    }

    pub fn has_left(&self) -> bool {
        self.left().is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right().is_some()
    }

    /// Orthogonal neighbors inside the grid, in order above, below, left, right
    pub fn neighbors(&self) -> Vec<Self> {
        [self.above(), self.below(), self.left(), self.right()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl<T> Deref for GridCell<'_, T> {
    type Target = Cell<T>;

    fn deref(&self) -> &Self::Target {
        self.cell
    }
}

impl<T> Clone for GridCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridCell<'_, T> {}

/// Two views are equal when they address the same position of the same grid
impl<T> PartialEq for GridCell<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid)
            && self.cell.row == other.cell.row
            && self.cell.col == other.cell.col
    }
}

impl<T> Eq for GridCell<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for GridCell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridCell")
            .field("row", &self.cell.row)
            .field("col", &self.cell.col)
            .field("value", &self.cell.value)
            .finish()
    }
}
