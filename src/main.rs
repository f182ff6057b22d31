use std::cell::RefCell;
use std::rc::Rc;

use canvas_grid::{
    CellContent, PointerEvent, PointerKind, RenderableGrid,
    application::{Cross, PaintState},
    input::{self, PointerTracker},
    rendering::{ScreenContext, ScreenSurface},
    telemetry,
};
use macroquad::prelude::{BLACK, Conf, next_frame};
use tracing::{info, warn};

const GRID_COLS: usize = 24;
const GRID_ROWS: usize = 18;

fn window_conf() -> Conf {
    Conf {
        window_title: "Canvas Grid".to_owned(),
        window_width: 960,
        window_height: 720,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init_tracing("info");

    let mut grid = RenderableGrid::new(ScreenSurface::new(), ScreenContext::new(), GRID_COLS, GRID_ROWS);

    // Listeners only queue clicks; the frame loop applies them to the grid
    let clicks: Rc<RefCell<Vec<PointerEvent>>> = Rc::default();
    for kind in [PointerKind::Down, PointerKind::ContextMenu] {
        let queue = Rc::clone(&clicks);
        grid.add_event_listener(kind.event_name(), move |event: &PointerEvent| {
            queue.borrow_mut().push(*event);
        });
    }

    info!(cols = GRID_COLS, rows = GRID_ROWS, "grid ready");

    let mut state = PaintState::new();
    let mut tracker = PointerTracker::new();
    let mut rng = rand::rng();

    loop {
        let events = tracker.poll();
        grid.surface_mut().dispatch(&events);

        let pending: Vec<PointerEvent> = clicks.borrow_mut().drain(..).collect();
        for event in pending {
            let Some((row, col)) = grid.point_to_entry(event.x, event.y) else {
                continue;
            };
            let content = match event.kind {
                PointerKind::ContextMenu => Some(CellContent::custom(Cross::new(BLACK))),
                _ => state.stroke_content(),
            };
            if let Err(err) = grid.set_cell(row, col, content) {
                warn!(%err, "paint rejected");
            }
        }

        state = input::process_keyboard_input(state, &mut grid, &mut rng);

        grid.draw();
        next_frame().await;
    }
}
