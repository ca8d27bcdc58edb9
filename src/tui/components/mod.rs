//! # TUI Components
//!
//! All UI components for the terminal page.
//!
//! ## Component Architecture
//!
//! Every component is a transient wrapper built each frame from borrowed
//! props, following the React pattern:
//! - `Header`: title line with the Previous/Next buttons
//! - `ProfileCard`: the active user's profile
//! - `PostList`: collapsible posts section with clickable titles
//! - `TodoList`: collapsible to-do section
//! - `PostModal`: the post detail overlay
//!
//! Components that own clickable areas borrow the frame's `HitMap` and
//! record their regions while rendering, so hit testing always matches what
//! is on screen.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── header.rs        (title + navigation buttons)
//! ├── profile_card.rs  (profile block)
//! ├── post_list.rs     (posts section)
//! ├── todo_list.rs     (todos section)
//! └── post_modal.rs    (detail overlay)
//! ```

mod header;
mod post_list;
mod post_modal;
mod profile_card;
mod todo_list;

pub use header::Header;
pub use post_list::PostList;
pub use post_modal::PostModal;
pub use profile_card::ProfileCard;
pub use todo_list::TodoList;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `s` to at most `max_width` display columns, adding "..." if cut.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 8), "hello...");
        assert_eq!(truncate_to_width("hello", 2), "..");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        // Each CJK char is two columns wide.
        let out = truncate_to_width("日本語のテキスト", 9);
        assert!(out.width() <= 9);
        assert!(out.ends_with("..."));
    }
}
