use tracing::debug;

use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, Focus, SearchPhase, StarPhase, ViewerState};

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    let effects = apply(state, action);
    state.normalize_focus();
    effects
}

fn apply(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::FocusNext => {
            cycle_focus(state, true);
            vec![]
        }
        Action::FocusPrev => {
            cycle_focus(state, false);
            vec![]
        }
        Action::Input(ch) => {
            match state.focus {
                Focus::Organization => state.search.criteria.organization_name.push(ch),
                Focus::Repository => state.search.criteria.repository_name.push(ch),
                Focus::StarButton | Focus::Issues => {}
            }
            vec![]
        }
        Action::Backspace => {
            match state.focus {
                Focus::Organization => {
                    state.search.criteria.organization_name.pop();
                }
                Focus::Repository => {
                    state.search.criteria.repository_name.pop();
                }
                Focus::StarButton | Focus::Issues => {}
            }
            vec![]
        }
        Action::Activate => {
            let next = match state.focus {
                Focus::Organization | Focus::Repository => Action::SubmitSearch,
                Focus::StarButton => Action::AddStar,
                Focus::Issues => Action::OpenIssue,
            };
            apply(state, next)
        }
        Action::MoveUp => {
            if state.focus == Focus::Issues {
                state.search.issue_cursor = state.search.issue_cursor.saturating_sub(1);
            }
            vec![]
        }
        Action::MoveDown => {
            if state.focus == Focus::Issues
                && state.search.issue_cursor + 1 < state.search.snapshot.recent_issues.len()
            {
                state.search.issue_cursor += 1;
            }
            vec![]
        }
        Action::SubmitSearch => {
            let request = state.next_request_id();
            let panel = &mut state.search;
            panel.search_error = None;
            panel.phase = SearchPhase::Searching { request };
            panel.latest_search = Some(request);
            panel.last_submitted = Some(panel.criteria.clone());
            debug!(%request, repo = %panel.criteria.full_name(), "Search submitted");
            vec![SideEffect::Search {
                request,
                criteria: panel.criteria.clone(),
            }]
        }
        Action::AddStar => {
            if !state.search.star_enabled() {
                return vec![];
            }
            let Some(criteria) = state.search.displayed_criteria.clone() else {
                return vec![];
            };
            let request = state.next_request_id();
            let panel = &mut state.search;
            panel.star = StarPhase::InFlight {
                request,
                for_search: panel.displayed_search,
            };
            panel.star_error = None;
            debug!(%request, repo_id = %panel.snapshot.id, "Star requested");
            vec![SideEffect::AddStar {
                request,
                repository_id: panel.snapshot.id.clone(),
                criteria,
            }]
        }
        Action::OpenIssue => match state.search.selected_issue() {
            Some(issue) if !issue.url.is_empty() => vec![SideEffect::OpenUrl(issue.url.clone())],
            _ => vec![],
        },
        Action::ViewerLoaded(viewer) => {
            if state.viewer == ViewerState::Loading {
                state.viewer = ViewerState::Loaded(viewer);
            }
            vec![]
        }
        Action::ViewerFailed(message) => {
            if state.viewer == ViewerState::Loading {
                state.viewer = ViewerState::Errored(message);
            }
            vec![]
        }
        Action::SearchSucceeded { request, snapshot } => {
            let panel = &mut state.search;
            if panel.latest_search != Some(request) {
                debug!(%request, "Ignoring stale search response");
                return vec![];
            }
            panel.snapshot = snapshot;
            panel.displayed_search = Some(request);
            panel.displayed_criteria = panel.last_submitted.clone();
            panel.phase = SearchPhase::Found;
            panel.star_error = None;
            panel.issue_cursor = 0;
            vec![]
        }
        Action::SearchFailed { request, message } => {
            let panel = &mut state.search;
            if panel.latest_search != Some(request) {
                debug!(%request, "Ignoring stale search failure");
                return vec![];
            }
            panel.search_error = Some(message);
            panel.phase = SearchPhase::Failed;
            vec![]
        }
        Action::StarSucceeded { request, patched } => {
            let panel = &mut state.search;
            let StarPhase::InFlight {
                request: in_flight,
                for_search,
            } = panel.star
            else {
                return vec![];
            };
            if in_flight != request {
                return vec![];
            }
            panel.star = StarPhase::Idle;
            match patched {
                Some(snapshot) if for_search == panel.displayed_search => {
                    panel.snapshot = snapshot;
                }
                Some(_) => debug!(%request, "Newer search result displayed, dropping star patch"),
                None => debug!(%request, "No cached search result to patch"),
            }
            vec![]
        }
        Action::StarFailed { request, message } => {
            let panel = &mut state.search;
            if matches!(panel.star, StarPhase::InFlight { request: r, .. } if r == request) {
                panel.star = StarPhase::Idle;
                panel.star_error = Some(message);
            }
            vec![]
        }
    }
}

fn cycle_focus(state: &mut AppState, forward: bool) {
    let order = state.focus_order();
    let pos = order.iter().position(|f| *f == state.focus).unwrap_or(0);
    let next = if forward {
        (pos + 1) % order.len()
    } else {
        (pos + order.len() - 1) % order.len()
    };
    state.focus = order[next];
}
