use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::state::{AppState, Focus, StarPhase, ViewerState};
use crate::ui::theme;
use crate::util::time::relative_time;

fn border_for(focused: bool) -> Style {
    if focused {
        theme::BORDER_FOCUSED
    } else {
        theme::BORDER_UNFOCUSED
    }
}

pub fn render_viewer(f: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" GitHub repo Search ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_UNFOCUSED);

    let lines = match &state.viewer {
        ViewerState::Loading => vec![Line::from(Span::styled("Loading...", theme::DIM))],
        ViewerState::Errored(msg) => vec![Line::from(Span::styled(msg.as_str(), theme::ERROR))],
        ViewerState::Loaded(viewer) => vec![
            Line::from(vec![
                Span::styled(viewer.display_name(), theme::VIEWER_NAME),
                Span::styled(format!(" @{}", viewer.login), theme::DIM),
            ]),
            Line::from(Span::styled(viewer.avatar_url.as_str(), theme::DIM)),
        ],
    };

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

pub fn render_search_form(f: &mut Frame, area: Rect, state: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let criteria = &state.search.criteria;
    render_input(
        f,
        halves[0],
        " Organization ",
        &criteria.organization_name,
        state.focus == Focus::Organization,
    );
    render_input(
        f,
        halves[1],
        " Repository ",
        &criteria.repository_name,
        state.focus == Focus::Repository,
    );
}

fn render_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_for(focused));

    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("_", theme::BORDER_FOCUSED));
    }

    let para = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(para, area);
}

pub fn render_result(f: &mut Frame, area: Rect, state: &AppState) {
    let panel = &state.search;
    let block = Block::default()
        .title(" Repository ")
        .borders(Borders::ALL)
        .border_style(border_for(matches!(
            state.focus,
            Focus::StarButton | Focus::Issues
        )));

    let mut lines = Vec::new();

    let repo = &panel.snapshot;
    if repo.is_present() {
        lines.push(Line::from(vec![
            Span::styled(repo.name.as_str(), theme::HEADER),
            Span::styled(format!(" {} stars", repo.star_count), theme::STAR_COUNT),
        ]));
        lines.push(Line::from(repo.description.as_str()));
        lines.push(Line::from(""));

        if panel.star_offered() {
            let style = if !panel.star_enabled() {
                theme::BUTTON_DISABLED
            } else if state.focus == Focus::StarButton {
                theme::HIGHLIGHT
            } else {
                theme::BUTTON
            };
            lines.push(Line::from(Span::styled(
                format!("[ {} ]", panel.star_label()),
                style,
            )));
        }
        if let Some(ref err) = panel.star_error {
            lines.push(Line::from(Span::styled(err.as_str(), theme::ERROR)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Last 5 issues:", theme::HEADER)));
        for (i, issue) in repo.recent_issues.iter().enumerate() {
            let selected = state.focus == Focus::Issues && i == panel.issue_cursor;
            let mut spans = vec![Span::styled(
                format!("  • {}", issue.title),
                if selected {
                    theme::HIGHLIGHT
                } else {
                    Style::default()
                },
            )];
            if let Some(ref published) = issue.published_at {
                spans.push(Span::styled(
                    format!("  {}", relative_time(published)),
                    theme::DIM,
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    if let Some(ref err) = panel.search_error {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(err.as_str(), theme::ERROR)));
    }

    let para = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let key_hints = match state.focus {
        Focus::Organization | Focus::Repository => "Tab: next field | Enter: search | Esc: quit",
        Focus::StarButton => "Tab: next | Enter: star | Esc: quit",
        Focus::Issues => "j/k: move | Enter: open issue | Tab: next | Esc: quit",
    };

    let status = if state.search.is_searching() {
        "Searching..."
    } else if matches!(state.search.star, StarPhase::InFlight { .. }) {
        "Starring..."
    } else {
        ""
    };

    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(key_hints.len() + status.len() + 1);

    let line = Line::from(vec![
        Span::styled(key_hints, theme::STATUS_BAR),
        Span::styled(" ".repeat(padding), theme::STATUS_BAR),
        Span::styled(status, theme::STATUS_BAR),
    ]);

    let bar = Paragraph::new(line).style(theme::STATUS_BAR);
    f.render_widget(bar, area);
}
