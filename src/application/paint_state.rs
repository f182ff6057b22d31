use macroquad::color::{BLUE, Color, GOLD, GREEN, ORANGE, PURPLE, RED};
use macroquad::math::Rect;
use rand::Rng;

use crate::domain::Grid;
use crate::rendering::{CellContent, Context2d, Drawable};

/// Brush colours, cycled with `next_brush`
pub const PALETTE: &[Color] = &[RED, ORANGE, GOLD, GREEN, BLUE, PURPLE];

/// PaintState holds the demo's brush selection.
/// Updated functionally, like the rest of the input handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaintState {
    pub brush: usize,
    pub erasing: bool,
}

impl PaintState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_brush(mut self) -> Self {
        self.brush = (self.brush + 1) % PALETTE.len();
        self.erasing = false;
        self
    }

    pub fn toggle_eraser(mut self) -> Self {
        self.erasing = !self.erasing;
        self
    }

    pub fn brush_color(&self) -> Color {
        PALETTE[self.brush % PALETTE.len()]
    }

    /// Content a primary click should leave behind
    pub fn stroke_content(&self) -> Option<CellContent> {
        (!self.erasing).then(|| CellContent::Color(self.brush_color()))
    }
}

/// Diagonal cross marker drawn inset from the cell edges
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cross {
    pub color: Color,
}

impl Cross {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Drawable for Cross {
    fn draw(&self, ctx: &mut dyn Context2d, rect: Rect) {
        let inset = rect.w.min(rect.h) * 0.2;
        let (left, right) = (rect.x + inset, rect.x + rect.w - inset);
        let (top, bottom) = (rect.y + inset, rect.y + rect.h - inset);

        ctx.set_stroke_style(self.color);
        ctx.begin_path();
        ctx.move_to(left, top);
        ctx.line_to(right, bottom);
        ctx.move_to(right, top);
        ctx.line_to(left, bottom);
        ctx.stroke();
    }
}

/// Fill roughly `density` of the cells with random palette colours,
/// emptying the rest
pub fn scatter<R: Rng + ?Sized>(grid: &mut Grid<CellContent>, rng: &mut R, density: f64) {
    let density = density.clamp(0.0, 1.0);
    grid.map_mut(|cell| {
        let content = rng
            .random_bool(density)
            .then(|| CellContent::Color(PALETTE[rng.random_range(0..PALETTE.len())]));
        cell.set_value(content);
    });
}
