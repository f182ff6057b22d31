mod cell;
mod error;
mod grid;

pub use cell::{Cell, GridCell};
pub use error::GridError;
pub use grid::Grid;
