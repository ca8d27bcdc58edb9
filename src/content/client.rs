use std::fmt;

use async_trait::async_trait;

use super::types::{PostId, PostRecord, TodoRecord, UserRecord};
use crate::core::cycle::UserId;

/// What a request was for. Carried by failures so logs and tests can tell
/// which panel kept its previous content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User(UserId),
    Posts(UserId),
    Todos(UserId),
    Post(PostId),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::User(id) => write!(f, "user {id}"),
            Resource::Posts(id) => write!(f, "posts of user {id}"),
            Resource::Todos(id) => write!(f, "todos of user {id}"),
            Resource::Post(id) => write!(f, "post {id}"),
        }
    }
}

/// The single failure kind: transport, status and decode errors all collapse
/// into this. Nothing retries on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailed {
    pub resource: Resource,
    pub reason: String,
}

impl FetchFailed {
    pub fn new(resource: Resource, reason: impl Into<String>) -> Self {
        Self {
            resource,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FetchFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to fetch {}: {}", self.resource, self.reason)
    }
}

impl std::error::Error for FetchFailed {}

#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Returns the name of the backing service (for logs).
    fn name(&self) -> &str;

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchFailed>;

    async fn fetch_posts(&self, id: UserId) -> Result<Vec<PostRecord>, FetchFailed>;

    async fn fetch_todos(&self, id: UserId) -> Result<Vec<TodoRecord>, FetchFailed>;

    async fn fetch_post(&self, id: PostId) -> Result<PostRecord, FetchFailed>;
}
