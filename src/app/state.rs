use crate::app::actions::RequestId;
use crate::github::models::{Issue, RepositorySnapshot, SearchCriteria, Viewer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerState {
    Loading,
    Loaded(Viewer),
    Errored(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing submitted yet.
    Idle,
    Searching { request: RequestId },
    /// The last search succeeded. The snapshot may still be empty if the
    /// server returned no repository.
    Found,
    /// The last search failed. Whatever was displayed before stays.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarPhase {
    Idle,
    InFlight {
        request: RequestId,
        /// Search whose result was displayed when the star started. The
        /// patched snapshot is only displayed while that result still is.
        for_search: Option<RequestId>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Organization,
    Repository,
    StarButton,
    Issues,
}

#[derive(Debug)]
pub struct SearchPanel {
    pub criteria: SearchCriteria,
    /// Criteria of the most recent submission.
    pub last_submitted: Option<SearchCriteria>,
    pub snapshot: RepositorySnapshot,
    /// Search that produced `snapshot`, and its criteria. The star's cache
    /// patch targets exactly these.
    pub displayed_search: Option<RequestId>,
    pub displayed_criteria: Option<SearchCriteria>,
    pub phase: SearchPhase,
    pub star: StarPhase,
    pub search_error: Option<String>,
    pub star_error: Option<String>,
    pub issue_cursor: usize,
    pub latest_search: Option<RequestId>,
}

impl SearchPanel {
    fn new() -> Self {
        Self {
            criteria: SearchCriteria::default(),
            last_submitted: None,
            snapshot: RepositorySnapshot::default(),
            displayed_search: None,
            displayed_criteria: None,
            phase: SearchPhase::Idle,
            star: StarPhase::Idle,
            search_error: None,
            star_error: None,
            issue_cursor: 0,
            latest_search: None,
        }
    }

    /// The star control is shown only for a displayed, unstarred repository.
    pub fn star_offered(&self) -> bool {
        self.snapshot.is_present() && !self.snapshot.viewer_has_starred
    }

    pub fn star_enabled(&self) -> bool {
        self.star_offered() && self.star == StarPhase::Idle
    }

    pub fn star_label(&self) -> &'static str {
        match self.star {
            StarPhase::Idle => "Star!",
            StarPhase::InFlight { .. } => "Adding ...",
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.phase, SearchPhase::Searching { .. })
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        if !self.snapshot.is_present() {
            return None;
        }
        self.snapshot.recent_issues.get(self.issue_cursor)
    }
}

#[derive(Debug)]
pub struct AppState {
    pub viewer: ViewerState,
    pub search: SearchPanel,
    pub focus: Focus,
    pub should_quit: bool,
    next_request: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            viewer: ViewerState::Loading,
            search: SearchPanel::new(),
            focus: Focus::Organization,
            should_quit: false,
            next_request: 0,
        }
    }

    pub fn next_request_id(&mut self) -> RequestId {
        self.next_request += 1;
        RequestId(self.next_request)
    }

    /// Focusable controls in Tab order. The star button and issue list only
    /// take part while they are displayed.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Organization, Focus::Repository];
        if self.search.star_offered() {
            order.push(Focus::StarButton);
        }
        if self.search.snapshot.is_present() && !self.search.snapshot.recent_issues.is_empty() {
            order.push(Focus::Issues);
        }
        order
    }

    pub fn is_input_focused(&self) -> bool {
        matches!(self.focus, Focus::Organization | Focus::Repository)
    }

    /// Move focus off a control that is no longer displayed.
    pub fn normalize_focus(&mut self) {
        if !self.focus_order().contains(&self.focus) {
            self.focus = Focus::Repository;
        }
        let issues = self.search.snapshot.recent_issues.len();
        if self.search.issue_cursor >= issues {
            self.search.issue_cursor = issues.saturating_sub(1);
        }
    }
}
