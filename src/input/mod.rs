use macroquad::input::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, is_mouse_button_released,
    mouse_position,
};
use rand::Rng;

use crate::application::{PaintState, scatter};
use crate::rendering::{CellContent, Context2d, RenderableGrid, Surface};

/// Pointer event kinds, named after the DOM events they mirror
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Down,
    Up,
    Move,
    ContextMenu,
}

impl PointerKind {
    /// Event name listeners register under
    pub const fn event_name(self) -> &'static str {
        match self {
            PointerKind::Down => "mousedown",
            PointerKind::Up => "mouseup",
            PointerKind::Move => "mousemove",
            PointerKind::ContextMenu => "contextmenu",
        }
    }
}

/// Raw pointer event in surface pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }
}

/// Mouse state sampled once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSnapshot {
    pub position: (f32, f32),
    pub left_pressed: bool,
    pub left_released: bool,
    pub right_pressed: bool,
}

impl PointerSnapshot {
    /// Read the current frame's mouse state from macroquad
    pub fn capture() -> Self {
        Self {
            position: mouse_position(),
            left_pressed: is_mouse_button_pressed(MouseButton::Left),
            left_released: is_mouse_button_released(MouseButton::Left),
            right_pressed: is_mouse_button_pressed(MouseButton::Right),
        }
    }
}

/// Turns per-frame mouse snapshots into discrete pointer events
#[derive(Debug, Default)]
pub struct PointerTracker {
    last_position: Option<(f32, f32)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll macroquad and return this frame's events
    pub fn poll(&mut self) -> Vec<PointerEvent> {
        self.events_for(PointerSnapshot::capture())
    }

    /// Events implied by `snapshot` given the previous position.
    /// Order: move, down, up, contextmenu.
    pub fn events_for(&mut self, snapshot: PointerSnapshot) -> Vec<PointerEvent> {
        let (x, y) = snapshot.position;
        let moved = self.last_position.is_some_and(|last| last != snapshot.position);
        self.last_position = Some(snapshot.position);

        [
            (moved, PointerKind::Move),
            (snapshot.left_pressed, PointerKind::Down),
            (snapshot.left_released, PointerKind::Up),
            (snapshot.right_pressed, PointerKind::ContextMenu),
        ]
        .into_iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, kind)| PointerEvent::new(kind, x, y))
        .collect()
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input<S, C, R>(
    state: PaintState,
    grid: &mut RenderableGrid<CellContent, S, C>,
    rng: &mut R,
) -> PaintState
where
    S: Surface,
    C: Context2d,
    R: Rng,
{
    if is_key_pressed(KeyCode::G) {
        if grid.has_grid() {
            grid.hide_grid();
        } else {
            grid.show_grid();
        }
    }
    if is_key_pressed(KeyCode::C) {
        grid.clear();
    }
    if is_key_pressed(KeyCode::R) {
        scatter(grid, rng, 0.3);
    }

    type KeyAction = (KeyCode, fn(PaintState) -> PaintState);

    let actions: [KeyAction; 2] = [
        (KeyCode::Tab, PaintState::next_brush),
        (KeyCode::E, PaintState::toggle_eraser),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> PointerSnapshot {
        PointerSnapshot {
            position: (x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_sample_is_not_a_move() {
        let mut tracker = PointerTracker::new();
        assert!(tracker.events_for(at(10.0, 10.0)).is_empty());
        assert!(tracker.events_for(at(10.0, 10.0)).is_empty());
    }

    #[test]
    fn test_move_reports_new_position() {
        let mut tracker = PointerTracker::new();
        tracker.events_for(at(10.0, 10.0));
        assert_eq!(
            tracker.events_for(at(12.0, 9.0)),
            vec![PointerEvent::new(PointerKind::Move, 12.0, 9.0)]
        );
    }

    #[test]
    fn test_click_sequence() {
        let mut tracker = PointerTracker::new();
        let press = PointerSnapshot {
            left_pressed: true,
            right_pressed: true,
            ..at(4.0, 5.0)
        };
        let kinds: Vec<_> = tracker.events_for(press).into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![PointerKind::Down, PointerKind::ContextMenu]);

        let release = PointerSnapshot {
            left_released: true,
            ..at(4.0, 5.0)
        };
        assert_eq!(
            tracker.events_for(release),
            vec![PointerEvent::new(PointerKind::Up, 4.0, 5.0)]
        );
    }

    #[test]
    fn test_event_names() {
        assert_eq!(PointerKind::Down.event_name(), "mousedown");
        assert_eq!(PointerKind::ContextMenu.event_name(), "contextmenu");
    }
}
