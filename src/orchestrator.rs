//! # Fetch Orchestration
//!
//! Turns effects into background fetches. Each navigation spawns three
//! independent tasks (user, posts, todos). Every task reports its own result
//! as soon as it lands; there is no barrier, so panels fill in any order.
//!
//! ```text
//!                      ┌──▶ fetch_user(N)  ──▶ Action::UserLoaded  ─┐
//! NavigationEvent(N,g) ├──▶ fetch_posts(N) ──▶ Action::PostsLoaded ─┼──▶ event loop
//!                      └──▶ fetch_todos(N) ──▶ Action::TodosLoaded ─┘
//! ```
//!
//! Results are tagged with the generation `g` so `update()` can drop anything
//! from a superseded navigation. Failures are forwarded as `Err`; the reducer
//! warns about and records the ones that are still current.

use std::sync::{Arc, mpsc};

use log::{debug, info, warn};
use tokio::task::AbortHandle;

use crate::content::{ContentClient, FetchFailed};
use crate::core::action::Action;
use crate::core::modal::DetailTicket;
use crate::core::navigation::NavigationEvent;

/// Spawn the three per-user fetches for `event`.
///
/// Returns abort handles so a newer navigation can cancel work that would be
/// discarded anyway.
pub fn spawn_navigation_fetches(
    client: Arc<dyn ContentClient>,
    event: NavigationEvent,
    tx: mpsc::Sender<Action>,
) -> Vec<AbortHandle> {
    let NavigationEvent {
        user_id,
        generation,
    } = event;
    info!(
        "Fetching user {} from {} (generation {})",
        user_id,
        client.name(),
        generation.get()
    );

    let user_client = client.clone();
    let user_tx = tx.clone();
    let user_task = tokio::spawn(async move {
        let result = logged(user_client.fetch_user(user_id).await);
        forward(&user_tx, Action::UserLoaded { generation, result });
    });

    let posts_client = client.clone();
    let posts_tx = tx.clone();
    let posts_task = tokio::spawn(async move {
        let result = logged(posts_client.fetch_posts(user_id).await);
        forward(&posts_tx, Action::PostsLoaded { generation, result });
    });

    let todos_task = tokio::spawn(async move {
        let result = logged(client.fetch_todos(user_id).await);
        forward(&tx, Action::TodosLoaded { generation, result });
    });

    vec![
        user_task.abort_handle(),
        posts_task.abort_handle(),
        todos_task.abort_handle(),
    ]
}

/// Spawn the detail fetch for an overlay ticket.
pub fn spawn_post_detail(
    client: Arc<dyn ContentClient>,
    ticket: DetailTicket,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Fetching post {} (ticket {})", ticket.post_id, ticket.token);
    tokio::spawn(async move {
        let result = logged(client.fetch_post(ticket.post_id).await);
        forward(&tx, Action::PostDetailLoaded { ticket, result });
    })
    .abort_handle()
}

/// Failures that survive the fence are warned about by the reducer.
fn logged<T>(result: Result<T, FetchFailed>) -> Result<T, FetchFailed> {
    if let Err(ref e) = result {
        debug!("{}", e);
    }
    result
}

fn forward(tx: &mpsc::Sender<Action>, action: Action) {
    debug!("Forwarding {}", action_name(&action));
    if tx.send(action).is_err() {
        warn!("Failed to forward fetch result: receiver dropped");
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::UserLoaded { .. } => "UserLoaded",
        Action::PostsLoaded { .. } => "PostsLoaded",
        Action::TodosLoaded { .. } => "TodosLoaded",
        Action::PostDetailLoaded { .. } => "PostDetailLoaded",
        _ => "Action",
    }
}
