//! # Post Detail Overlay
//!
//! ```text
//!            open(id)               fetch ok
//!  Closed ───────────▶ Loading(id) ─────────▶ Open(post)
//!    ▲                    │  fetch err             │
//!    └────────────────────┴────────────────────────┘
//!              close (button, backdrop, Escape)
//! ```
//!
//! Only one overlay exists at a time. `open` while not `Closed` discards the
//! current overlay and issues a fresh ticket; completions for older tickets
//! are dropped when they arrive.

use log::{debug, info};

use crate::content::{FetchFailed, PostId, PostRecord};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Loading(PostId),
    Open(PostRecord),
}

/// Gestures that dismiss the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

/// Identifies one detail request. A completion only counts if its ticket is
/// still the newest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailTicket {
    pub post_id: PostId,
    pub token: u64,
}

/// What happened to a detail completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Shown,
    Failed,
    Stale,
}

#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
    token: u64,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// True while the overlay is on screen.
    pub fn is_mounted(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn open(&mut self, post_id: PostId) -> DetailTicket {
        match &self.state {
            ModalState::Closed => {}
            ModalState::Loading(pending) => {
                debug!("Discarding pending detail request for post {}", pending);
            }
            ModalState::Open(post) => {
                debug!("Replacing open overlay for post {}", post.id);
            }
        }
        self.token += 1;
        self.state = ModalState::Loading(post_id);
        info!("Requesting detail for post {} (ticket {})", post_id, self.token);
        DetailTicket {
            post_id,
            token: self.token,
        }
    }

    pub fn resolve(
        &mut self,
        ticket: DetailTicket,
        result: Result<PostRecord, FetchFailed>,
    ) -> DetailOutcome {
        let awaited = ticket.token == self.token
            && matches!(self.state, ModalState::Loading(id) if id == ticket.post_id);
        if !awaited {
            debug!(
                "Dropping stale detail for post {} (ticket {}, current {})",
                ticket.post_id, ticket.token, self.token
            );
            return DetailOutcome::Stale;
        }

        match result {
            Ok(post) => {
                info!("Showing overlay for post {}", post.id);
                self.state = ModalState::Open(post);
                DetailOutcome::Shown
            }
            Err(_) => {
                self.state = ModalState::Closed;
                DetailOutcome::Failed
            }
        }
    }

    /// Returns true if something was dismissed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        info!("Closing overlay via {:?}", trigger);
        self.state = ModalState::Closed;
        true
    }
}
