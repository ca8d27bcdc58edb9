//! `ContentClient` over HTTP with reqwest.
//!
//! Endpoints (all GET):
//! - `/users/{id}`
//! - `/users/{id}/posts` → `{"posts": [...]}`
//! - `/users/{id}/todos` → `{"todos": [...]}`
//! - `/posts/{id}`

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use super::client::{ContentClient, FetchFailed, Resource};
use super::types::{PostId, PostRecord, PostsPage, TodoRecord, TodosPage, UserRecord};
use crate::core::cycle::UserId;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

pub struct HttpContentClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpContentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            client: reqwest::Client::new(),
        }
    }

    /// Like `new`, but every request gives up after `timeout`.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self {
            base_url: normalize_base_url(base_url.into()),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        resource: Resource,
    ) -> Result<T, FetchFailed> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchFailed::new(resource, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(FetchFailed::new(
                resource,
                format!("HTTP {}: {}", status.as_u16(), body),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchFailed::new(resource, e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|e| FetchFailed::new(resource, format!("decode error: {e}")))
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[async_trait]
impl ContentClient for HttpContentClient {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn fetch_user(&self, id: UserId) -> Result<UserRecord, FetchFailed> {
        self.get_json(&format!("/users/{id}"), Resource::User(id))
            .await
    }

    async fn fetch_posts(&self, id: UserId) -> Result<Vec<PostRecord>, FetchFailed> {
        let page: PostsPage = self
            .get_json(&format!("/users/{id}/posts"), Resource::Posts(id))
            .await?;
        Ok(page.posts)
    }

    async fn fetch_todos(&self, id: UserId) -> Result<Vec<TodoRecord>, FetchFailed> {
        let page: TodosPage = self
            .get_json(&format!("/users/{id}/todos"), Resource::Todos(id))
            .await?;
        Ok(page.todos)
    }

    async fn fetch_post(&self, id: PostId) -> Result<PostRecord, FetchFailed> {
        self.get_json(&format!("/posts/{id}"), Resource::Post(id))
            .await
    }
}
