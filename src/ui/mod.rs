pub mod mosaic_scene;

use mosaic::core::presenter::UnlockPresenter;
use mosaic::grid::AchievementGridState;
use mosaic::unlock::Millis;
use mosaic_scene::CellMetrics;
use rand::Rng;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Width of the status panel on the right.
pub const STATUS_PANEL_WIDTH: u16 = 34;

/// Draws the whole preview: mosaic on the left, status on the right, and
/// the celebration or detail card on top.
pub fn draw_ui<R: Rng>(
    frame: &mut Frame,
    grid: &AchievementGridState,
    presenter: &UnlockPresenter<R>,
    metrics: CellMetrics,
    now: Millis,
    notes: &[String],
) {
    let size = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_PANEL_WIDTH)])
        .split(size);

    let cell_frame = presenter.frame(now);
    let animating = presenter.animating_id().map(|id| (id, &cell_frame));

    mosaic_scene::render_mosaic(frame, chunks[0], grid, metrics, animating);
    mosaic_scene::render_status(frame, chunks[1], grid, presenter, notes);
    mosaic_scene::render_presentation(frame, chunks[0], presenter);
}
