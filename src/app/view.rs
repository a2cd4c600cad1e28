use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    // Viewer header, search form, result, status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::render_viewer(f, vertical[0], state);
    widgets::render_search_form(f, vertical[1], state);
    widgets::render_result(f, vertical[2], state);
    widgets::render_status_bar(f, vertical[3], state);
}
