use thiserror::Error;

/// Errors raised by the bounds-checked grid accessors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}
