use std::fmt;

use crate::github::models::{RepositorySnapshot, SearchCriteria, Viewer};

/// Token issued by the state for every request it starts. Monotonically
/// increasing, so a larger id was issued later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub enum Action {
    // Keyboard
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// Enter on whatever has focus.
    Activate,
    MoveUp,
    MoveDown,
    SubmitSearch,
    AddStar,
    OpenIssue,
    Quit,

    // Results from background tasks
    ViewerLoaded(Viewer),
    ViewerFailed(String),
    SearchSucceeded {
        request: RequestId,
        snapshot: RepositorySnapshot,
    },
    SearchFailed {
        request: RequestId,
        message: String,
    },
    StarSucceeded {
        request: RequestId,
        patched: Option<RepositorySnapshot>,
    },
    StarFailed {
        request: RequestId,
        message: String,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub enum SideEffect {
    FetchViewer,
    Search {
        request: RequestId,
        criteria: SearchCriteria,
    },
    AddStar {
        request: RequestId,
        repository_id: String,
        criteria: SearchCriteria,
    },
    OpenUrl(String),
}
