//! # TodoList Component
//!
//! Collapsible to-do section. Completed items carry the `completed` class,
//! drawn as dimmed, struck-through text.
//!
//! Drawing starts at the panel's scroll offset. When items are cut off, the
//! bottom border shows which range is visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use crate::core::render::{COMPLETED_CLASS, TodoItem, TodosPanel};
use crate::tui::bindings::{HitMap, HitTarget};
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;

pub struct TodoList<'a> {
    pub panel: &'a TodosPanel,
    pub header: &'a str,
    pub hits: &'a mut HitMap,
}

impl<'a> TodoList<'a> {
    pub fn new(panel: &'a TodosPanel, header: &'a str, hits: &'a mut HitMap) -> Self {
        Self {
            panel,
            header,
            hits,
        }
    }
}

impl Component for TodoList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let marker = if self.panel.expanded { "▾" } else { "▸" };
        let mut block = Block::bordered()
            .title(format!(" {marker} {} ", self.header))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let total = self.panel.items.len();
        let rows = usize::from(area.height.saturating_sub(2));
        if self.panel.expanded && rows > 0 && (self.panel.offset > 0 || total > rows) {
            let first = self.panel.offset.min(total.saturating_sub(1));
            let last = (first + rows).min(total);
            block = block.title_bottom(
                Line::from(format!(" {}-{} of {} ", first + 1, last, total)).right_aligned(),
            );
        }
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.add(
            Rect::new(area.x, area.y, area.width, area.height.min(1)),
            HitTarget::TodosHeader,
        );

        if !self.panel.expanded {
            return;
        }

        if self.panel.items.is_empty() {
            frame.render_widget(
                Paragraph::new("Loading...").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        self.hits.add(inner, HitTarget::TodosBody);

        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .panel
            .items
            .iter()
            .skip(self.panel.offset)
            .map(|item| ListItem::new(todo_line(item, width)))
            .collect();
        frame.render_widget(List::new(items), inner);
    }
}

fn todo_line(item: &TodoItem, width: usize) -> Line<'static> {
    let checkbox = match item {
        TodoItem::Placeholder => "",
        TodoItem::Todo { completed: true, .. } => "[x] ",
        TodoItem::Todo { .. } => "[ ] ",
    };
    let text = truncate_to_width(item.text(), width.saturating_sub(checkbox.len()));
    let mut style = class_style(item.class());
    if item.is_struck_through() {
        style = style.add_modifier(Modifier::CROSSED_OUT);
    }
    if matches!(item, TodoItem::Placeholder) {
        style = style.fg(Color::DarkGray);
    }
    Line::from(vec![Span::raw(checkbox), Span::styled(text, style)])
}

/// Terminal styling for a visual class.
fn class_style(class: Option<&str>) -> Style {
    match class {
        Some(COMPLETED_CLASS) => Style::default().fg(Color::DarkGray),
        _ => Style::default(),
    }
}
