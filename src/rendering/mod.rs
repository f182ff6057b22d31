//! Drawing-surface seam and the grid renderer built on top of it.
//!
//! A surface answers "how big am I right now" and accepts event listeners;
//! a context executes drawing primitives. Both are borrowed from the
//! caller, so `&mut S` / `&mut C` implement the traits too.

mod content;
mod recording;
mod renderable_grid;
mod screen;
mod style;

pub use content::{Appearance, CellContent, Drawable, Paint};
pub use recording::{DrawCommand, RecordingContext, RecordingSurface};
pub use renderable_grid::{FrameStats, RenderableGrid};
pub use screen::{ScreenContext, ScreenSurface};
pub use style::{RenderStyle, to_hex8};

use macroquad::color::Color;
use macroquad::math::Rect;

/// Handler registered with `Surface::add_event_listener`
pub type Listener<E> = Box<dyn FnMut(&E)>;

/// Something that occupies pixels and delivers input events.
pub trait Surface {
    /// Event payload delivered to listeners
    type Event;

    /// Live pixel rectangle occupied by the surface
    fn bounding_box(&self) -> Rect;

    /// Register `handler` for the named event ("mousedown", ...)
    fn add_event_listener(&mut self, event: &str, handler: Listener<Self::Event>);
}

/// 2D drawing primitives, modelled on a canvas rendering context.
pub trait Context2d {
    fn set_fill_style(&mut self, color: Color);

    fn set_stroke_style(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    /// Fill `rect` with the current fill style
    fn fill_rect(&mut self, rect: Rect);

    /// Discard the current path and start a new one
    fn begin_path(&mut self);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    /// Stroke the current path with the current stroke style
    fn stroke(&mut self);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    type Event = S::Event;

    fn bounding_box(&self) -> Rect {
        (**self).bounding_box()
    }

    fn add_event_listener(&mut self, event: &str, handler: Listener<Self::Event>) {
        (**self).add_event_listener(event, handler);
    }
}

impl<C: Context2d + ?Sized> Context2d for &mut C {
    fn set_fill_style(&mut self, color: Color) {
        (**self).set_fill_style(color);
    }

    fn set_stroke_style(&mut self, color: Color) {
        (**self).set_stroke_style(color);
    }

    fn set_line_width(&mut self, width: f32) {
        (**self).set_line_width(width);
    }

    fn fill_rect(&mut self, rect: Rect) {
        (**self).fill_rect(rect);
    }

    fn begin_path(&mut self) {
        (**self).begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y);
    }

    fn stroke(&mut self) {
        (**self).stroke();
    }
}
