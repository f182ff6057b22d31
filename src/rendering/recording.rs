use macroquad::color::{BLACK, Color};
use macroquad::math::{Rect, Vec2, vec2};

use super::{Context2d, Listener, Surface};
use crate::input::PointerEvent;

/// Headless surface with a settable bounding box.
/// Listeners are stored and fired by `emit`.
pub struct RecordingSurface {
    bounds: Rect,
    listeners: Vec<(String, Listener<PointerEvent>)>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_bounds(Rect::new(0.0, 0.0, width, height))
    }

    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            bounds,
            listeners: Vec::new(),
        }
    }

    /// Resize in place, keeping the top-left corner
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds.w = width;
        self.bounds.h = height;
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `payload` to every listener registered for `event`.
    /// Returns how many listeners ran.
    pub fn emit(&mut self, event: &str, payload: &PointerEvent) -> usize {
        let mut ran = 0;
        for (name, handler) in &mut self.listeners {
            if name == event {
                handler(payload);
                ran += 1;
            }
        }
        ran
    }
}

impl Surface for RecordingSurface {
    type Event = PointerEvent;

    fn bounding_box(&self) -> Rect {
        self.bounds
    }

    fn add_event_listener(&mut self, event: &str, handler: Listener<PointerEvent>) {
        self.listeners.push((event.to_owned(), handler));
    }
}

/// A drawing operation as it reached the context, with styles resolved
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill { rect: Rect, color: Color },
    Stroke { path: Vec<Vec2>, color: Color, width: f32 },
}

/// Context that records what would have been drawn
#[derive(Clone, Debug)]
pub struct RecordingContext {
    fill_style: Color,
    stroke_style: Color,
    line_width: f32,
    subpaths: Vec<Vec<Vec2>>,
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            fill_style: BLACK,
            stroke_style: BLACK,
            line_width: 1.0,
            subpaths: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// All fills in draw order
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Fill { rect, color } => Some((*rect, *color)),
                DrawCommand::Stroke { .. } => None,
            })
            .collect()
    }

    /// All stroked paths in draw order
    pub fn strokes(&self) -> Vec<&[Vec2]> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Stroke { path, .. } => Some(path.as_slice()),
                DrawCommand::Fill { .. } => None,
            })
            .collect()
    }

    /// Colour of the last fill covering the point, if any
    pub fn fill_at(&self, x: f32, y: f32) -> Option<Color> {
        let point = vec2(x, y);
        self.fills()
            .into_iter()
            .rev()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, color)| color)
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Context2d for RecordingContext {
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
        self.commands.push(DrawCommand::Fill {
            rect,
            color: self.fill_style,
        });
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

    /// Records one stroke per subpath that has at least one segment
    fn stroke(&mut self) {
        for subpath in self.subpaths.iter().filter(|p| p.len() >= 2) {
            self.commands.push(DrawCommand::Stroke {
                path: subpath.clone(),
                color: self.stroke_style,
                width: self.line_width,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerKind;
    use macroquad::color::RED;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_later_fill_wins() {
        let mut ctx = RecordingContext::new();
        ctx.set_fill_style(RED);
        ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        ctx.set_fill_style(BLACK);
        ctx.fill_rect(Rect::new(5.0, 5.0, 10.0, 10.0));

        assert_eq!(ctx.fill_at(1.0, 1.0), Some(RED));
        assert_eq!(ctx.fill_at(6.0, 6.0), Some(BLACK));
        assert_eq!(ctx.fill_at(50.0, 50.0), None);
    }

    #[test]
    fn test_stroke_needs_a_segment() {
        let mut ctx = RecordingContext::new();
        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.stroke();
        assert!(ctx.strokes().is_empty());

        ctx.line_to(0.0, 5.0);
        ctx.stroke();
        assert_eq!(ctx.strokes(), vec![&[vec2(0.0, 0.0), vec2(0.0, 5.0)][..]]);
    }

    #[test]
    fn test_emit_only_reaches_matching_listeners() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut surface = RecordingSurface::new(100.0, 100.0);

        let sink = Rc::clone(&hits);
        surface.add_event_listener("mousedown", Box::new(move |e: &PointerEvent| sink.borrow_mut().push(e.x)));
        surface.add_event_listener("mouseup", Box::new(|_: &PointerEvent| {}));

        let event = PointerEvent::new(PointerKind::Down, 12.0, 3.0);
        assert_eq!(surface.emit("mousedown", &event), 1);
        assert_eq!(surface.emit("mousemove", &event), 0);
        assert_eq!(surface.listener_count(), 2);
        assert_eq!(*hits.borrow(), vec![12.0]);
    }
}
