use super::{Cell, GridCell, GridError};
use tracing::trace;

/// Grid is a fixed-size rectangle of cells addressed by (row, column).
/// Cells are stored row-major; dimensions never change after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T> {
    /// Create a new grid with every cell empty
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, |_, _| None)
    }

    /// Create a grid whose initial content comes from `init(row, col)`
    pub fn filled<F>(width: usize, height: usize, mut init: F) -> Self
    where
        F: FnMut(usize, usize) -> Option<T>,
    {
        let cells = (0..height)
            .flat_map(|row| (0..width).map(move |col| (row, col)))
            .map(|(row, col)| Cell::new(row, col, init(row, col)))
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Same as `height`
    pub const fn rows(&self) -> usize {
        self.height
    }

    /// Same as `width`
    pub const fn cols(&self) -> usize {
        self.width
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The one bounds rule every accessor uses
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if self.contains(row, col) {
            Ok(self.get_index(row, col))
        } else {
            trace!(row, col, rows = self.height, cols = self.width, "rejected cell lookup");
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.height,
                cols: self.width,
            })
        }
    }

    /// Get the cell at (row, col), or `None` outside the grid
    pub fn try_get_cell(&self, row: usize, col: usize) -> Option<GridCell<'_, T>> {
        self.contains(row, col)
            .then(|| GridCell::new(self, &self.cells[self.get_index(row, col)]))
    }

    pub fn try_get_cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell<T>> {
        if self.contains(row, col) {
            let idx = self.get_index(row, col);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    /// Get the cell at (row, col)
    pub fn get_cell(&self, row: usize, col: usize) -> Result<GridCell<'_, T>, GridError> {
        let idx = self.checked_index(row, col)?;
        Ok(GridCell::new(self, &self.cells[idx]))
    }

    pub fn get_cell_mut(&mut self, row: usize, col: usize) -> Result<&mut Cell<T>, GridError> {
        let idx = self.checked_index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Replace the content at (row, col), returning the previous content.
    /// The cell itself (and its position) stays in place.
    pub fn set_cell(&mut self, row: usize, col: usize, value: Option<T>) -> Result<Option<T>, GridError> {
        Ok(self.get_cell_mut(row, col)?.set_value(value))
    }

    /// Call `f` on every cell, row-major
    pub fn map<'a, F>(&'a self, f: F)
    where
        F: FnMut(GridCell<'a, T>),
    {
        self.iter_cells().for_each(f);
    }

    /// Call `f` on every cell mutably, row-major
    pub fn map_mut<F>(&mut self, f: F)
    where
        F: FnMut(&mut Cell<T>),
    {
        self.cells.iter_mut().for_each(f);
    }

    /// Iterate over all cells, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = GridCell<'_, T>> + '_ {
        self.cells.iter().map(move |cell| GridCell::new(self, cell))
    }

    /// Build a grid of the same shape from this grid's content
    pub fn map_values<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        let cells = self
            .cells
            .iter()
            .map(|cell| Cell::new(cell.row(), cell.col(), cell.value().map(&mut f)))
            .collect();

        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.iter_cells().all(|c| c.is_empty()));
    }

    #[test]
    fn test_get_cell_rejects_upper_bounds() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(
            grid.get_cell(3, 0).unwrap_err(),
            GridError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 4 }
        );
        assert!(grid.get_cell(0, 4).is_err());
        assert!(grid.get_cell(2, 3).is_ok());
    }

    #[test]
    fn test_try_get_cell_is_symmetric() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert!(grid.try_get_cell(0, 4).is_none());
        assert!(grid.try_get_cell(3, 0).is_none());
        assert!(grid.try_get_cell(2, 3).is_some());
    }

    #[test]
    fn test_set_cell_keeps_position() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(grid.set_cell(1, 0, Some("a")).unwrap(), None);
        assert_eq!(grid.set_cell(1, 0, Some("b")).unwrap(), Some("a"));

        let cell = grid.get_cell(1, 0).unwrap();
        assert_eq!((cell.row(), cell.col()), (1, 0));
        assert_eq!(cell.value(), Some(&"b"));
    }

    #[test]
    fn test_set_cell_out_of_bounds_leaves_grid_untouched() {
        let mut grid = Grid::new(2, 2);
        assert!(grid.set_cell(2, 2, Some(1)).is_err());
        assert!(grid.iter_cells().all(|c| c.is_empty()));
    }

    #[test]
    fn test_map_is_row_major() {
        let grid: Grid<u8> = Grid::new(2, 3);
        let mut seen = Vec::new();
        grid.map(|c| seen.push((c.row(), c.col())));
        assert_eq!(seen, vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_map_values_and_clear() {
        let mut grid = Grid::filled(3, 2, |row, col| (row == col).then_some(row + col));
        let doubled = grid.map_values(|v| v * 2);
        assert_eq!(doubled.get_cell(1, 1).unwrap().value(), Some(&4));
        assert!(doubled.get_cell(0, 1).unwrap().is_empty());

        grid.clear();
        assert!(grid.iter_cells().all(|c| c.is_empty()));
    }

    #[test]
    fn test_map_mut_updates_content() {
        let mut grid = Grid::filled(2, 2, |_, _| Some(1));
        grid.map_mut(|cell| {
            let row = cell.row();
            if let Some(v) = cell.value_mut() {
                *v += row;
            }
        });
        assert_eq!(grid.get_cell(1, 1).unwrap().value(), Some(&2));
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid: Grid<u8> = Grid::new(0, 5);
        assert!(grid.is_empty());
        assert_eq!(grid.len(), 0);
        assert!(grid.try_get_cell(0, 0).is_none());
        let mut count = 0;
        grid.map(|_| count += 1);
        assert_eq!(count, 0);
    }

    proptest! {
        #[test]
        fn cells_know_their_position(width in 1usize..12, height in 1usize..12) {
            let grid: Grid<u8> = Grid::new(width, height);
            for row in 0..height {
                for col in 0..width {
                    let cell = grid.get_cell(row, col).unwrap();
                    prop_assert_eq!((cell.row(), cell.col()), (row, col));
                }
            }
        }

        #[test]
        fn try_get_cell_matches_bounds(
            width in 0usize..10,
            height in 0usize..10,
            row in 0usize..14,
            col in 0usize..14
        ) {
            let grid: Grid<u8> = Grid::new(width, height);
            prop_assert_eq!(grid.try_get_cell(row, col).is_some(), row < height && col < width);
            prop_assert_eq!(grid.get_cell(row, col).is_ok(), row < height && col < width);
        }

        #[test]
        fn map_visits_every_cell_once(width in 1usize..12, height in 1usize..12) {
            let grid: Grid<u8> = Grid::new(width, height);
            let mut seen = std::collections::HashSet::new();
            let mut calls = 0;
            grid.map(|c| {
                calls += 1;
                seen.insert((c.row(), c.col()));
            });
            prop_assert_eq!(calls, width * height);
            prop_assert_eq!(seen.len(), width * height);
        }

        #[test]
        fn neighbors_are_symmetric(width in 1usize..8, height in 1usize..8) {
            let grid: Grid<u8> = Grid::new(width, height);
            for cell in grid.iter_cells() {
                if let Some(right) = cell.right() {
                    prop_assert_eq!(right.left(), Some(cell));
                }
                if let Some(below) = cell.below() {
                    prop_assert_eq!(below.above(), Some(cell));
                }
                if let Some(left) = cell.left() {
                    prop_assert_eq!(left.right(), Some(cell));
                }
                if let Some(above) = cell.above() {
                    prop_assert_eq!(above.below(), Some(cell));
                }
            }
        }

        #[test]
        fn neighbor_count_matches_position(width in 2usize..8, height in 2usize..8) {
            let grid: Grid<u8> = Grid::new(width, height);
            for cell in grid.iter_cells() {
                let on_row_edge = cell.row() == 0 || cell.row() == height - 1;
                let on_col_edge = cell.col() == 0 || cell.col() == width - 1;
                let expected = 4 - usize::from(on_row_edge) - usize::from(on_col_edge);
                prop_assert_eq!(cell.neighbors().len(), expected);
            }
        }
    }
}
