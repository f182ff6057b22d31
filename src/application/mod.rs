mod paint_state;

pub use paint_state::{Cross, PALETTE, PaintState, scatter};
