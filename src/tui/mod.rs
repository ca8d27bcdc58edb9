//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the page,
//! and translates keyboard and mouse events into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One thread owns the `App`. Each pass it:
//!
//! 1. draws the page if something changed (input, resize or a fetch result),
//! 2. waits up to 250ms for terminal input and drains everything pending,
//! 3. applies fetch results that background tasks sent over the channel.
//!
//! Every `Effect` returned by `update()` is dispatched here: navigation
//! effects abort the previous navigation's fetches and start new ones,
//! detail effects replace any in-flight detail fetch.

mod bindings;
mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::content::{ContentClient, HttpContentClient};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::orchestrator;
use crate::tui::bindings::{HitMap, bind};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Clickable regions from the last draw
    pub hits: HitMap,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            hits: HitMap::default(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Abort handles of the fetches currently in flight.
#[derive(Default)]
struct InFlight {
    navigation: Vec<AbortHandle>,
    detail: Option<AbortHandle>,
}

impl InFlight {
    fn replace_navigation(&mut self, handles: Vec<AbortHandle>) {
        for handle in self.navigation.drain(..) {
            handle.abort();
        }
        self.navigation = handles;
    }

    fn replace_detail(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.detail.replace(handle) {
            previous.abort();
        }
    }

    fn abort_all(&mut self) {
        self.replace_navigation(Vec::new());
        if let Some(handle) = self.detail.take() {
            handle.abort();
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the content client from a resolved config.
pub fn build_client(config: &ResolvedConfig) -> Arc<dyn ContentClient> {
    Arc::new(HttpContentClient::with_timeout(
        config.base_url.clone(),
        config.request_timeout,
    ))
}

/// Carry out an effect. Returns true when the app should quit.
fn dispatch(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    in_flight: &mut InFlight,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::LoadUser(event) => {
            let handles =
                orchestrator::spawn_navigation_fetches(app.client.clone(), event, tx.clone());
            in_flight.replace_navigation(handles);
            false
        }
        Effect::LoadPostDetail(ticket) => {
            let handle = orchestrator::spawn_post_detail(app.client.clone(), ticket, tx.clone());
            in_flight.replace_detail(handle);
            false
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(build_client(&config));
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut in_flight = InFlight::default();

    let effect = update(&mut app, Action::GoTo(config.start_user));
    dispatch(effect, &app, &tx, &mut in_flight);

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            if matches!(event, TuiEvent::Resize) {
                continue;
            }
            let Some(action) = bind(&event, &tui.hits, app.modal.is_mounted()) else {
                continue;
            };
            debug!("Input {:?} -> {:?}", event, action);
            let effect = update(&mut app, action);
            if dispatch(effect, &app, &tx, &mut in_flight) {
                should_quit = true;
                break;
            }
        }

        // Handle fetch results from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            let effect = update(&mut app, action);
            if dispatch(effect, &app, &tx, &mut in_flight) {
                should_quit = true;
            }
        }
    }

    in_flight.abort_all();
    ratatui::restore();
    info!("Profile browser shutting down");
    Ok(())
}
