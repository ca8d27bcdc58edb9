//! # Post Detail Overlay
//!
//! Centered panel over a dimmed page showing the full post. Closed with the
//! button, a click on the backdrop, or Esc.
//!
//! Follows the transient wrapper pattern: `PostModal` is created each frame
//! with the open post and the frame's `HitMap`, and records the overlay's
//! regions (backdrop, panel, close button) while drawing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::content::PostRecord;
use crate::tui::bindings::{HitMap, OverlayRegions};
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;

const CLOSE_LABEL: &str = "[ Close Modal ]";

pub struct PostModal<'a> {
    pub post: &'a PostRecord,
    pub hits: &'a mut HitMap,
}

impl<'a> PostModal<'a> {
    pub fn new(post: &'a PostRecord, hits: &'a mut HitMap) -> Self {
        Self { post, hits }
    }
}

impl Component for PostModal<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Dim whatever is underneath; the whole area acts as the backdrop.
        frame
            .buffer_mut()
            .set_style(area, Style::default().add_modifier(Modifier::DIM));

        let panel = centered_rect(70, 60, area);
        frame.render_widget(Clear, panel);

        let title_width = panel.width.saturating_sub(4) as usize;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(format!(
                " {} ",
                truncate_to_width(&self.post.title, title_width)
            )))
            .title_alignment(Alignment::Left)
            .padding(Padding::horizontal(1));
        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let [body_area, views_area, _, button_row] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(self.post.body.as_str()).wrap(Wrap { trim: true }),
            body_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Views: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(self.post.views.to_string()),
            ])),
            views_area,
        );

        let close_button = button_rect(button_row);
        frame.render_widget(
            Paragraph::new(CLOSE_LABEL).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            close_button,
        );

        self.hits.set_overlay(OverlayRegions {
            backdrop: area,
            panel,
            close_button,
        });
    }
}

/// Close button centered in its row, clipped to the row width.
fn button_rect(row: Rect) -> Rect {
    let width = (CLOSE_LABEL.width() as u16).min(row.width);
    let x = row.x + (row.width - width) / 2;
    Rect::new(x, row.y, width, row.height.min(1))
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
