//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::content::{
    ContentClient, FetchFailed, PostId, PostRecord, Resource, TodoRecord, UserRecord,
};
use crate::core::cycle::UserId;

pub fn sample_user(id: u32) -> UserRecord {
    UserRecord {
        id,
        first_name: format!("User{id}"),
        last_name: "Tester".to_string(),
        age: 20 + id,
        email: format!("user{id}@example.com"),
        phone: format!("+1 555-01{id:02}"),
        image_url: format!("https://example.com/avatar/{id}.png"),
    }
}

pub fn sample_post(id: u64) -> PostRecord {
    PostRecord {
        id: PostId(id),
        title: format!("Post number {id}"),
        body: format!("Body of post {id}. ").repeat(8),
        views: id * 3,
    }
}

pub fn sample_todo(text: &str, completed: bool) -> TodoRecord {
    TodoRecord {
        id: 1,
        text: text.to_string(),
        completed,
    }
}

/// In-memory client that answers from the sample builders and records
/// every request. Users listed in `failing` fail every request.
#[derive(Default)]
pub struct StubClient {
    pub failing: HashSet<u32>,
    pub requests: Mutex<Vec<Resource>>,
}

impl StubClient {
    pub fn failing_for(raw: u32) -> Self {
        Self {
            failing: HashSet::from([raw]),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<Resource> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, resource: Resource) -> Result<(), FetchFailed> {
        self.requests.lock().unwrap().push(resource);
        let raw = match resource {
            Resource::User(id) | Resource::Posts(id) | Resource::Todos(id) => id.get(),
            Resource::Post(_) => return Ok(()),
        };
        if self.failing.contains(&raw) {
            return Err(FetchFailed::new(resource, "stubbed failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentClient for StubClient {
    fn name(&self) -> &str {
        "stub"
    }

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchFailed> {
        self.record(Resource::User(id))?;
        Ok(sample_user(id.get()))
    }

    async fn fetch_posts(&self, id: UserId) -> Result<Vec<PostRecord>, FetchFailed> {
        self.record(Resource::Posts(id))?;
        Ok(vec![sample_post(u64::from(id.get()) * 100)])
    }

    async fn fetch_todos(&self, id: UserId) -> Result<Vec<TodoRecord>, FetchFailed> {
        self.record(Resource::Todos(id))?;
        Ok(vec![sample_todo(&format!("todo of {id}"), id.get() % 2 == 0)])
    }

    async fn fetch_post(&self, id: PostId) -> Result<PostRecord, FetchFailed> {
        self.record(Resource::Post(id))?;
        Ok(sample_post(id.0))
    }
}

/// Creates a test App backed by a `StubClient`.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubClient::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_client_records_and_fails() {
        let client = StubClient::failing_for(2);
        let ok = tokio_test::block_on(client.fetch_user(UserId::FIRST));
        assert!(ok.is_ok());

        let two = UserId::new(2).unwrap();
        let err = tokio_test::block_on(client.fetch_todos(two)).unwrap_err();
        assert_eq!(err.resource, Resource::Todos(two));
        assert_eq!(
            client.requests(),
            vec![Resource::User(UserId::FIRST), Resource::Todos(two)]
        );
    }
}
