//! # Input Bindings
//!
//! Static mapping from terminal gestures to core `Action`s. No state of its
//! own: the caller passes the hit regions recorded by the last draw and
//! whether an overlay is mounted.
//!
//! | Gesture                         | Action                        |
//! |---------------------------------|-------------------------------|
//! | Previous button / `←`           | `PreviousUser`                |
//! | Next button / `→`               | `NextUser`                    |
//! | Posts header / `p`              | `TogglePosts`                 |
//! | To Dos header / `t`             | `ToggleTodos`                 |
//! | Post title click                | `OpenPost(id)`                |
//! | `↑` / `↓` / `Enter`             | select / open post            |
//! | `PgUp` / `PgDn`, wheel on todos | scroll todos                  |
//! | Wheel elsewhere                 | select post                   |
//! | `Esc`                           | `CloseModal(EscapeKey)`       |
//! | Overlay close button            | `CloseModal(CloseButton)`     |
//! | Click on the backdrop itself    | `CloseModal(Backdrop)`        |
//!
//! While an overlay is mounted it covers the page, so clicks only reach the
//! overlay's own regions.

use ratatui::layout::{Position, Rect};

use crate::content::PostId;
use crate::core::action::Action;
use crate::core::modal::CloseTrigger;
use crate::tui::event::TuiEvent;

/// Clickable things on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    PreviousButton,
    NextButton,
    PostsHeader,
    TodosHeader,
    /// Todo rows; only scrolled, never clicked.
    TodosBody,
    PostTitle(PostId),
}

/// Regions of the mounted overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayRegions {
    pub backdrop: Rect,
    pub panel: Rect,
    pub close_button: Rect,
}

impl OverlayRegions {
    /// True only for points on the backdrop itself, never its panel.
    pub fn is_backdrop(&self, pos: Position) -> bool {
        self.backdrop.contains(pos) && !self.panel.contains(pos)
    }

    pub fn is_close_button(&self, pos: Position) -> bool {
        self.close_button.contains(pos)
    }
}

/// Clickable regions recorded during the last draw.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
    overlay: Option<OverlayRegions>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
        self.overlay = None;
    }

    pub fn add(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    pub fn set_overlay(&mut self, regions: OverlayRegions) {
        self.overlay = Some(regions);
    }

    pub fn overlay(&self) -> Option<&OverlayRegions> {
        self.overlay.as_ref()
    }

    /// Page target under `pos`, latest-drawn first.
    pub fn target_at(&self, pos: Position) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| *target)
    }
}

pub fn bind(event: &TuiEvent, hits: &HitMap, overlay_mounted: bool) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Escape => Some(Action::CloseModal(CloseTrigger::EscapeKey)),
        TuiEvent::Left => Some(Action::PreviousUser),
        TuiEvent::Right => Some(Action::NextUser),
        TuiEvent::InputChar('p') => Some(Action::TogglePosts),
        TuiEvent::InputChar('t') => Some(Action::ToggleTodos),
        TuiEvent::Up if !overlay_mounted => Some(Action::SelectPreviousPost),
        TuiEvent::Down if !overlay_mounted => Some(Action::SelectNextPost),
        TuiEvent::Submit if !overlay_mounted => Some(Action::OpenSelectedPost),
        TuiEvent::PageUp if !overlay_mounted => Some(Action::ScrollTodosUp),
        TuiEvent::PageDown if !overlay_mounted => Some(Action::ScrollTodosDown),
        TuiEvent::ScrollUp(col, row) if !overlay_mounted => {
            Some(if over_todos(hits, *col, *row) {
                Action::ScrollTodosUp
            } else {
                Action::SelectPreviousPost
            })
        }
        TuiEvent::ScrollDown(col, row) if !overlay_mounted => {
            Some(if over_todos(hits, *col, *row) {
                Action::ScrollTodosDown
            } else {
                Action::SelectNextPost
            })
        }
        TuiEvent::MouseClick(col, row) => {
            let pos = Position::new(*col, *row);
            if overlay_mounted {
                return click_overlay(hits.overlay()?, pos);
            }
            match hits.target_at(pos)? {
                HitTarget::PreviousButton => Some(Action::PreviousUser),
                HitTarget::NextButton => Some(Action::NextUser),
                HitTarget::PostsHeader => Some(Action::TogglePosts),
                HitTarget::TodosHeader => Some(Action::ToggleTodos),
                HitTarget::TodosBody => None,
                HitTarget::PostTitle(id) => Some(Action::OpenPost(id)),
            }
        }
        _ => None,
    }
}

fn over_todos(hits: &HitMap, col: u16, row: u16) -> bool {
    hits.target_at(Position::new(col, row)) == Some(HitTarget::TodosBody)
}

fn click_overlay(overlay: &OverlayRegions, pos: Position) -> Option<Action> {
    if overlay.is_close_button(pos) {
        Some(Action::CloseModal(CloseTrigger::CloseButton))
    } else if overlay.is_backdrop(pos) {
        Some(Action::CloseModal(CloseTrigger::Backdrop))
    } else {
        None
    }
}
