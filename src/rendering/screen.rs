use macroquad::prelude::*;
use tracing::trace;

use super::{Context2d, Listener, Surface};
use crate::input::PointerEvent;

/// The macroquad window as a drawing surface.
/// Size is read from the window on every call, so resizes show up on the next frame.
pub struct ScreenSurface {
    listeners: Vec<(String, Listener<PointerEvent>)>,
}

impl ScreenSurface {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Hand polled events to the listeners registered for their names
    pub fn dispatch(&mut self, events: &[PointerEvent]) {
        for event in events {
            let name = event.kind.event_name();
            for (_, handler) in self.listeners.iter_mut().filter(|(n, _)| n == name) {
                handler(event);
            }
            trace!(name, x = event.x, y = event.y, "dispatched pointer event");
        }
    }
}

impl Default for ScreenSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for ScreenSurface {
    type Event = PointerEvent;

    fn bounding_box(&self) -> Rect {
        Rect::new(0.0, 0.0, screen_width(), screen_height())
    }

    fn add_event_listener(&mut self, event: &str, handler: Listener<PointerEvent>) {
        self.listeners.push((event.to_owned(), handler));
    }
}

/// Immediate-mode context over macroquad's shape functions.
/// Paths are buffered until `stroke` and drawn as line segments.
pub struct ScreenContext {
    fill_style: Color,
    stroke_style: Color,
    line_width: f32,
    subpaths: Vec<Vec<Vec2>>,
}

impl ScreenContext {
    pub fn new() -> Self {
        Self {
            fill_style: BLACK,
            stroke_style: BLACK,
            line_width: 1.0,
            subpaths: Vec::new(),
        }
    }
}

impl Default for ScreenContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Context2d for ScreenContext {
    fn set_fill_style(&mut self, color: Color) {
        self.fill_style = color;
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke_style = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn fill_rect(&mut self, rect: Rect) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, self.fill_style);
    }

    fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.subpaths.push(vec![vec2(x, y)]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(vec2(x, y)),
            None => self.subpaths.push(vec![vec2(x, y)]),
        }
    }

    fn stroke(&mut self) {
        let segments = self.subpaths.iter().flat_map(|subpath| subpath.windows(2));
        for segment in segments {
            let (from, to) = (segment[0], segment[1]);
            draw_line(from.x, from.y, to.x, to.y, self.line_width, self.stroke_style);
        }
    }
}
