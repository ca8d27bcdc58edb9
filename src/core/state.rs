//! # Application State
//!
//! Core business state for the profile browser. Domain logic only, no
//! terminal types. Presentation state (hit regions) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── client: Arc<dyn ContentClient>     // remote content service
//! ├── navigation: NavigationController   // current user + generation
//! ├── profile: ProfilePanel              // card + section headers
//! ├── posts: PostsPanel                  // post list, expand state
//! ├── todos: TodosPanel                  // todo list, expand state
//! ├── selected_post: Option<usize>       // keyboard selection in posts
//! ├── modal: ModalController             // detail overlay
//! ├── status_message: String             // title bar text
//! └── fetch_failures: VecDeque           // recent FetchFailed events
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::content::{ContentClient, FetchFailed};
use crate::core::modal::ModalController;
use crate::core::navigation::NavigationController;
use crate::core::render::{PostsPanel, ProfilePanel, TodosPanel};

/// How many recent fetch failures are kept for inspection.
pub const MAX_RECORDED_FAILURES: usize = 32;

pub struct App {
    pub client: Arc<dyn ContentClient>,
    pub navigation: NavigationController,
    pub profile: ProfilePanel,
    pub posts: PostsPanel,
    pub todos: TodosPanel,
    pub selected_post: Option<usize>,
    pub modal: ModalController,
    pub status_message: String,
    pub fetch_failures: VecDeque<FetchFailed>,
}

impl App {
    pub fn new(client: Arc<dyn ContentClient>) -> Self {
        Self {
            client,
            navigation: NavigationController::new(),
            profile: ProfilePanel::default(),
            posts: PostsPanel::default(),
            todos: TodosPanel::default(),
            selected_post: None,
            modal: ModalController::new(),
            status_message: String::from("Welcome!"),
            fetch_failures: VecDeque::new(),
        }
    }

    /// Record a failure event, dropping the oldest past the cap.
    pub fn record_failure(&mut self, failure: FetchFailed) {
        if self.fetch_failures.len() == MAX_RECORDED_FAILURES {
            self.fetch_failures.pop_front();
        }
        self.fetch_failures.push_back(failure);
    }
}
