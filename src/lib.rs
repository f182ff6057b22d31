// Domain layer - cells and the grid that owns them
pub mod domain;

// Application layer - demo paint state
pub mod application;

// Infrastructure layer - drawing surfaces, input, logging
pub mod rendering;
pub mod input;
pub mod telemetry;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridCell, GridError};
pub use rendering::{CellContent, Context2d, Drawable, Paint, RenderableGrid, Surface};
pub use input::{PointerEvent, PointerKind};
