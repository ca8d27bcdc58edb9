//! # Header Component
//!
//! Single title line with the navigation buttons:
//!
//! ```text
//!  Profile Browser  [◀ Previous User]  User 5/30  [Next User ▶]  Emily Johnson (5/30)
//! ```
//!
//! The button spans are recorded in the `HitMap` so mouse clicks land on
//! exactly what was drawn.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::cycle::{POOL_SIZE, UserId};
use crate::tui::bindings::{HitMap, HitTarget};
use crate::tui::component::Component;

const TITLE: &str = " Profile Browser  ";
const PREVIOUS_LABEL: &str = "[◀ Previous User]";
const NEXT_LABEL: &str = "[Next User ▶]";
const GAP: &str = "  ";

pub struct Header<'a> {
    pub user: UserId,
    pub status: &'a str,
    pub hits: &'a mut HitMap,
}

impl<'a> Header<'a> {
    pub fn new(user: UserId, status: &'a str, hits: &'a mut HitMap) -> Self {
        Self { user, status, hits }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let counter = format!("User {}/{}", self.user, POOL_SIZE);
        let button = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut x = area.x;
        let mut place = |text: &str| {
            let start = x;
            x = x.saturating_add(text.width() as u16);
            start
        };
        place(TITLE);
        let previous_x = place(PREVIOUS_LABEL);
        place(GAP);
        place(counter.as_str());
        place(GAP);
        let next_x = place(NEXT_LABEL);

        self.hits.add(
            button_rect(previous_x, PREVIOUS_LABEL, area),
            HitTarget::PreviousButton,
        );
        self.hits.add(button_rect(next_x, NEXT_LABEL, area), HitTarget::NextButton);

        let line = Line::from(vec![
            Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(PREVIOUS_LABEL, button),
            Span::raw(GAP),
            Span::raw(counter),
            Span::raw(GAP),
            Span::styled(NEXT_LABEL, button),
            Span::raw(GAP),
            Span::styled(self.status.to_string(), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Clip a button's span to the visible header area.
fn button_rect(x: u16, label: &str, area: Rect) -> Rect {
    let right = area.x.saturating_add(area.width);
    if x >= right {
        return Rect::new(x, area.y, 0, 0);
    }
    let width = (label.width() as u16).min(right - x);
    Rect::new(x, area.y, width, 1)
}
