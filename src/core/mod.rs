//! # Core Application Logic
//!
//! The browser's business logic. It knows nothing about terminals or HTTP.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐               ┌──────────────┐
//!          │    TUI     │               │ Orchestrator │
//!          │  Adapter   │               │ (fetch tasks)│
//!          │ (ratatui)  │               │              │
//!          └────────────┘               └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cycle`]: `UserId` and the wrap-around over the 30-user pool
//! - [`navigation`]: current user + generation counter
//! - [`render`]: display state for profile, posts and todos
//! - [`modal`]: the post detail overlay state machine
//! - [`state`]: the `App` struct, all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod cycle;
pub mod modal;
pub mod navigation;
pub mod render;
pub mod state;
