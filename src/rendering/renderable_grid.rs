use std::ops::{Deref, DerefMut};

use macroquad::math::{Rect, vec2};
use tracing::debug;

use super::{Appearance, Context2d, Paint, RenderStyle, Surface};
use crate::domain::{Grid, GridCell, GridError};

/// What a single `draw` call did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Cells filled with a colour
    pub filled: usize,
    /// Cells handed to their content's draw routine
    pub custom: usize,
    /// Cells whose content had nothing to draw
    pub skipped: usize,
    pub gridlines: usize,
}

/// A grid bound to a drawing surface and context.
///
/// Pixel geometry is derived from the surface's bounding box on every
/// call; nothing about the surface size is cached, so a resized surface
/// is picked up by the next `draw` or lookup. The bounding box is the only
/// pixel-size source used by drawing, gridlines and hit testing.
///
/// Derefs to [`Grid`] for all cell access.
pub struct RenderableGrid<T, S, C> {
    grid: Grid<T>,
    surface: S,
    context: C,
    show_grid: bool,
    style: RenderStyle,
}

impl<T, S: Surface, C: Context2d> RenderableGrid<T, S, C> {
    /// Bind a new `width` x `height` grid to a surface/context pair.
    /// Gridlines start enabled.
    pub fn new(surface: S, context: C, width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            surface,
            context,
            show_grid: true,
            style: RenderStyle::default(),
        }
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub const fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut RenderStyle {
        &mut self.style
    }

    /// Register an input handler on the bound surface
    pub fn add_event_listener<F>(&mut self, event: &str, handler: F)
    where
        F: FnMut(&S::Event) + 'static,
    {
        self.surface.add_event_listener(event, Box::new(handler));
    }

    pub fn show_grid(&mut self) {
        self.show_grid = true;
    }

    pub fn hide_grid(&mut self) {
        self.show_grid = false;
    }

    pub const fn has_grid(&self) -> bool {
        self.show_grid
    }

    /// Width of the surface in pixels
    pub fn total_width(&self) -> f32 {
        let bounds = self.surface.bounding_box();
        bounds.right() - bounds.left()
    }

    /// Height of the surface in pixels
    pub fn total_height(&self) -> f32 {
        let bounds = self.surface.bounding_box();
        bounds.bottom() - bounds.top()
    }

    /// Pixel size of one cell, or `None` when there is nothing to divide
    fn cell_size(&self) -> Option<(f32, f32)> {
        if self.grid.is_empty() {
            return None;
        }
        Some((
            self.total_width() / self.grid.width() as f32,
            self.total_height() / self.grid.height() as f32,
        ))
    }

    /// Pixel rectangle covered by the cell at (row, col)
    pub fn cell_rect(&self, row: usize, col: usize) -> Result<Rect, GridError> {
        let cell = self.grid.get_cell(row, col)?;
        let (cell_w, cell_h) = self.cell_size().unwrap_or_default();
        Ok(Rect::new(
            cell.col() as f32 * cell_w,
            cell.row() as f32 * cell_h,
            cell_w,
            cell_h,
        ))
    }

    /// Convert a pixel position to (row, col).
    ///
    /// Points outside `[0, total_width] x [0, total_height]` map to `None`.
    /// The far edges are part of the surface and land in the last row/column.
    pub fn point_to_entry(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (w, h) = (self.total_width(), self.total_height());
        if !(0.0..=w).contains(&x) || !(0.0..=h).contains(&y) || w <= 0.0 || h <= 0.0 {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size()?;
        let col = ((x / cell_w).floor() as usize).min(self.grid.width() - 1);
        let row = ((y / cell_h).floor() as usize).min(self.grid.height() - 1);
        Some((row, col))
    }

    /// The cell under a pixel position, if any
    pub fn get_containing_cell(&self, x: f32, y: f32) -> Option<GridCell<'_, T>> {
        let (row, col) = self.point_to_entry(x, y)?;
        self.grid.get_cell(row, col).ok()
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub const fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    /// Give back the grid and the borrowed drawing pair
    pub fn into_parts(self) -> (Grid<T>, S, C) {
        (self.grid, self.surface, self.context)
    }
}

impl<T: Paint, S: Surface, C: Context2d> RenderableGrid<T, S, C> {
    /// Full render pass: background, every cell, then gridlines if enabled
    pub fn draw(&mut self) -> FrameStats {
        let (w, h) = (self.total_width(), self.total_height());
        let cell_size = self.cell_size();
        let mut stats = FrameStats::default();

        self.context.set_fill_style(self.style.background);
        self.context.fill_rect(Rect::new(0.0, 0.0, w, h));

        let Some((cell_w, cell_h)) = cell_size else {
            debug!(?stats, "drew empty grid");
            return stats;
        };

        let context = &mut self.context;
        self.grid.map(|cell| {
            let Some(value) = cell.value() else {
                return;
            };
            let rect = Rect::new(
                cell.col() as f32 * cell_w,
                cell.row() as f32 * cell_h,
                cell_w,
                cell_h,
            );
            match value.appearance() {
                Appearance::Fill(color) => {
                    context.set_fill_style(color);
                    context.fill_rect(rect);
                    stats.filled += 1;
                }
                Appearance::Custom(drawable) => {
                    drawable.draw(&mut *context, rect);
                    stats.custom += 1;
                }
                Appearance::Inert => stats.skipped += 1,
            }
        });

        if self.show_grid {
            stats.gridlines = self.draw_gridlines(cell_w, cell_h, w, h);
        }

        debug!(
            width = w,
            height = h,
            filled = stats.filled,
            custom = stats.custom,
            skipped = stats.skipped,
            gridlines = stats.gridlines,
            "drew grid"
        );
        stats
    }

    /// Vertical lines at every column boundary, then horizontal lines at every row boundary
    fn draw_gridlines(&mut self, cell_w: f32, cell_h: f32, w: f32, h: f32) -> usize {
        let ctx = &mut self.context;
        ctx.set_stroke_style(self.style.gridline);
        ctx.set_line_width(self.style.gridline_width);

        let vertical = (0..=self.grid.width()).map(|i| {
            let x = i as f32 * cell_w;
            (vec2(x, 0.0), vec2(x, h))
        });
        let horizontal = (0..=self.grid.height()).map(|i| {
            let y = i as f32 * cell_h;
            (vec2(0.0, y), vec2(w, y))
        });

        let mut drawn = 0;
        for (from, to) in vertical.chain(horizontal) {
            ctx.begin_path();
            ctx.move_to(from.x, from.y);
            ctx.line_to(to.x, to.y);
            ctx.stroke();
            drawn += 1;
        }
        drawn
    }
}

impl<T, S, C> Deref for RenderableGrid<T, S, C> {
    type Target = Grid<T>;

    fn deref(&self) -> &Self::Target {
        &self.grid
    }
}

impl<T, S, C> DerefMut for RenderableGrid<T, S, C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.grid
    }
}
