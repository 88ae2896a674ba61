pub mod footer;
pub mod header;
pub mod targets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Color;

use crate::tui::state::AppState;

pub const COLOR_BRAND: Color = Color::Cyan;
pub const COLOR_LABEL: Color = Color::Gray;
pub const COLOR_MUTED: Color = Color::DarkGray;
pub const COLOR_SUCCESS: Color = Color::Indexed(46);
pub const COLOR_ERROR: Color = Color::Indexed(196);

/// Render the entire UI
pub fn render(f: &mut Frame, state: &AppState) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    header::render(f, chunks[0], state);
    targets::render(f, chunks[1], state);
    footer::render(f, chunks[2]);
}
