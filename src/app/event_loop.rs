use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, Focus};
use crate::app::update::update;
use crate::app::view;
use crate::github::GraphqlClient;
use crate::github::repository;

pub async fn run(client: GraphqlClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: GraphqlClient,
) -> Result<()> {
    let mut state = AppState::new();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    spawn_side_effect(SideEffect::FetchViewer, &client, &action_tx);

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        let action = tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => map_event_to_action(&event, &state),
                    Some(Err(e)) => {
                        error!(error = %e, "Terminal event error");
                        None
                    }
                    None => Some(Action::Quit),
                }
            }
            Some(action) = action_rx.recv() => Some(action),
        };

        if let Some(action) = action {
            for effect in update(&mut state, action) {
                spawn_side_effect(effect, &client, &action_tx);
            }
        }
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab => Some(Action::FocusNext),
        KeyCode::BackTab => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Backspace if state.is_input_focused() => Some(Action::Backspace),
        KeyCode::Char(c) if state.is_input_focused() && !modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Input(*c))
        }
        KeyCode::Char('k') if state.focus == Focus::Issues => Some(Action::MoveUp),
        KeyCode::Char('j') if state.focus == Focus::Issues => Some(Action::MoveDown),
        _ => None,
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    client: &GraphqlClient,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::FetchViewer => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!("Fetching viewer");

                let action = match repository::fetch_viewer(&client).await {
                    Ok(viewer) => Action::ViewerLoaded(viewer),
                    Err(e) => {
                        error!(error = %e, "Failed to fetch viewer");
                        Action::ViewerFailed(e.to_string())
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::Search { request, criteria } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(%request, repo = %criteria.full_name(), "Searching repository");

                let action = match repository::search_repository(&client, &criteria).await {
                    Ok(snapshot) => Action::SearchSucceeded { request, snapshot },
                    Err(e) => {
                        error!(%request, error = %e, "Repository search failed");
                        Action::SearchFailed {
                            request,
                            message: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::AddStar {
            request,
            repository_id,
            criteria,
        } => {
            let client = client.clone();
            let tx = action_tx.clone();

            tokio::spawn(async move {
                debug!(%request, repo_id = %repository_id, "Adding star");

                let action = match repository::star_repository(
                    &client,
                    &repository_id,
                    &criteria,
                    false,
                )
                .await
                {
                    Ok(patched) => Action::StarSucceeded { request, patched },
                    Err(e) => {
                        error!(%request, error = %e, "Failed to add star");
                        Action::StarFailed {
                            request,
                            message: e.to_string(),
                        }
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
    }
}
