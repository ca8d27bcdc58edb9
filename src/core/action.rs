//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User presses Right? That's `Action::NextUser`.
//! The posts request answers? That's `Action::PostsLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing the I/O the event loop should start. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Fetch completions carry the generation (or detail ticket) they were issued
//! under; anything older than the current one is logged and dropped.

use log::{debug, info, warn};

use crate::content::{FetchFailed, PostId, PostRecord, TodoRecord, UserRecord};
use crate::core::cycle::{POOL_SIZE, UserId};
use crate::core::modal::{CloseTrigger, DetailOutcome, DetailTicket};
use crate::core::navigation::{Generation, NavigationEvent};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    GoTo(UserId),
    NextUser,
    PreviousUser,
    UserLoaded {
        generation: Generation,
        result: Result<UserRecord, FetchFailed>,
    },
    PostsLoaded {
        generation: Generation,
        result: Result<Vec<PostRecord>, FetchFailed>,
    },
    TodosLoaded {
        generation: Generation,
        result: Result<Vec<TodoRecord>, FetchFailed>,
    },
    TogglePosts,
    ToggleTodos,
    ScrollTodosUp,
    ScrollTodosDown,
    SelectNextPost,
    SelectPreviousPost,
    OpenSelectedPost,
    OpenPost(PostId),
    PostDetailLoaded {
        ticket: DetailTicket,
        result: Result<PostRecord, FetchFailed>,
    },
    CloseModal(CloseTrigger),
    Quit,
}

/// I/O requested by `update()`, carried out by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch user, posts and todos for the event's user.
    LoadUser(NavigationEvent),
    LoadPostDetail(DetailTicket),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::GoTo(id) => {
            let event = app.navigation.go_to(id);
            navigated(app, event)
        }
        Action::NextUser => {
            let event = app.navigation.go_next();
            navigated(app, event)
        }
        Action::PreviousUser => {
            let event = app.navigation.go_previous();
            navigated(app, event)
        }
        Action::UserLoaded { generation, result } => {
            if !accept(app, generation, "user") {
                return Effect::None;
            }
            match result {
                Ok(user) => {
                    app.profile.render(&user);
                    app.status_message = format!(
                        "{} ({}/{})",
                        user.full_name(),
                        app.navigation.current(),
                        POOL_SIZE
                    );
                }
                Err(e) => {
                    app.status_message =
                        format!("User {}/{}", app.navigation.current(), POOL_SIZE);
                    failed(app, e);
                }
            }
            Effect::None
        }
        Action::PostsLoaded { generation, result } => {
            if !accept(app, generation, "posts") {
                return Effect::None;
            }
            match result {
                Ok(posts) => {
                    app.posts.render(&posts);
                    app.selected_post = None;
                }
                Err(e) => failed(app, e),
            }
            Effect::None
        }
        Action::TodosLoaded { generation, result } => {
            if !accept(app, generation, "todos") {
                return Effect::None;
            }
            match result {
                Ok(todos) => app.todos.render(&todos),
                Err(e) => failed(app, e),
            }
            Effect::None
        }
        Action::TogglePosts => {
            app.posts.toggle();
            if !app.posts.expanded {
                app.selected_post = None;
            }
            Effect::None
        }
        Action::ToggleTodos => {
            app.todos.toggle();
            Effect::None
        }
        Action::ScrollTodosUp => {
            app.todos.scroll_up();
            Effect::None
        }
        Action::ScrollTodosDown => {
            app.todos.scroll_down();
            Effect::None
        }
        // A collapsed posts section has nothing to select.
        Action::SelectNextPost | Action::SelectPreviousPost | Action::OpenSelectedPost
            if !app.posts.expanded =>
        {
            Effect::None
        }
        Action::SelectNextPost => {
            let count = app.posts.post_ids().len();
            if count > 0 {
                app.selected_post = Some(match app.selected_post {
                    Some(idx) => (idx + 1).min(count - 1),
                    None => 0,
                });
            }
            Effect::None
        }
        Action::SelectPreviousPost => {
            if !app.posts.post_ids().is_empty() {
                app.selected_post = Some(app.selected_post.map_or(0, |idx| idx.saturating_sub(1)));
            }
            Effect::None
        }
        Action::OpenSelectedPost => {
            let selected = app
                .selected_post
                .and_then(|idx| app.posts.post_ids().get(idx).copied());
            match selected {
                Some(id) => update(app, Action::OpenPost(id)),
                None => Effect::None,
            }
        }
        Action::OpenPost(id) => Effect::LoadPostDetail(app.modal.open(id)),
        Action::PostDetailLoaded { ticket, result } => {
            let failure = result.as_ref().err().cloned();
            if app.modal.resolve(ticket, result) == DetailOutcome::Failed {
                if let Some(e) = failure {
                    failed(app, e);
                }
            }
            Effect::None
        }
        Action::CloseModal(trigger) => {
            app.modal.close(trigger);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn navigated(app: &mut App, event: NavigationEvent) -> Effect {
    info!("Loading user {} (generation {})", event.user_id, event.generation.get());
    app.status_message = format!("Loading user {}/{}...", event.user_id, POOL_SIZE);
    Effect::LoadUser(event)
}

/// Generation fence: true if the completion belongs to the latest navigation.
fn accept(app: &App, generation: Generation, what: &str) -> bool {
    if app.navigation.is_current(generation) {
        return true;
    }
    debug!(
        "Discarding stale {} result (generation {}, current {})",
        what,
        generation.get(),
        app.navigation.generation().get()
    );
    false
}

/// Panels keep their previous content; the failure is only logged and recorded.
fn failed(app: &mut App, failure: FetchFailed) {
    warn!("{}", failure);
    app.record_failure(failure);
}
