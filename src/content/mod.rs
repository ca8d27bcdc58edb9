//! # Content Service
//!
//! Read-only access to the remote service that serves users, posts and
//! todos. The rest of the app talks to it only through [`ContentClient`].

pub mod client;
pub mod http;
pub mod types;

pub use client::{ContentClient, FetchFailed, Resource};
pub use http::{DEFAULT_BASE_URL, HttpContentClient};
pub use types::{PostId, PostRecord, TodoRecord, UserRecord};
