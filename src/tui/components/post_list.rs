//! # PostList Component
//!
//! Collapsible posts section. The block title is the section header
//! ("Emily's Posts") and toggles the section when clicked. Each post shows
//! its title (clickable, opens the detail overlay) and a wrapped excerpt.
//!
//! When the keyboard selection would fall below the visible area, the list
//! starts drawing at the selected post instead.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::render::{NO_POSTS, PostItem, PostsPanel};
use crate::tui::bindings::{HitMap, HitTarget};
use crate::tui::component::Component;
use crate::tui::components::truncate_to_width;

pub struct PostList<'a> {
    pub panel: &'a PostsPanel,
    pub header: &'a str,
    pub selected: Option<usize>,
    pub hits: &'a mut HitMap,
}

impl<'a> PostList<'a> {
    pub fn new(
        panel: &'a PostsPanel,
        header: &'a str,
        selected: Option<usize>,
        hits: &'a mut HitMap,
    ) -> Self {
        Self {
            panel,
            header,
            selected,
            hits,
        }
    }
}

/// One post laid out for a given width: title line + excerpt lines + spacer.
struct LaidOutPost {
    title: String,
    excerpt: Vec<String>,
}

impl LaidOutPost {
    fn height(&self) -> u16 {
        (1 + self.excerpt.len() + 1) as u16
    }
}

impl Component for PostList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let marker = if self.panel.expanded { "▾" } else { "▸" };
        let block = Block::bordered()
            .title(format!(" {marker} {} ", self.header))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.hits.add(
            Rect::new(area.x, area.y, area.width, area.height.min(1)),
            HitTarget::PostsHeader,
        );

        if !self.panel.expanded {
            return;
        }

        let dim = Style::default().fg(Color::DarkGray);
        if self.panel.items.is_empty() {
            frame.render_widget(Paragraph::new("Loading...").style(dim), inner);
            return;
        }

        let width = inner.width as usize;
        let posts: Vec<(usize, &PostItem, LaidOutPost)> = self
            .panel
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| (idx, item, lay_out(item, width)))
            .collect();

        let start = first_visible(&posts, self.selected, inner.height);
        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for (idx, item, laid_out) in posts.iter().skip(start) {
            if y >= bottom {
                break;
            }
            let PostItem::Post { id, .. } = item else {
                frame.render_widget(
                    Paragraph::new(NO_POSTS).style(dim),
                    Rect::new(inner.x, y, inner.width, 1),
                );
                y += 1;
                continue;
            };

            let mut title_style = Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            if self.selected == Some(*idx) {
                title_style = title_style.add_modifier(Modifier::REVERSED);
            }
            let title_rect = Rect::new(inner.x, y, inner.width, 1);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(laid_out.title.clone(), title_style))),
                title_rect,
            );
            self.hits.add(title_rect, HitTarget::PostTitle(*id));
            y += 1;

            for line in &laid_out.excerpt {
                if y >= bottom {
                    break;
                }
                frame.render_widget(
                    Paragraph::new(line.as_str()),
                    Rect::new(inner.x, y, inner.width, 1),
                );
                y += 1;
            }
            y += 1;
        }
    }
}

fn lay_out(item: &PostItem, width: usize) -> LaidOutPost {
    match item {
        PostItem::Placeholder => LaidOutPost {
            title: NO_POSTS.to_string(),
            excerpt: Vec::new(),
        },
        PostItem::Post { title, excerpt, .. } => LaidOutPost {
            title: truncate_to_width(title, width),
            excerpt: textwrap::wrap(excerpt, width.max(1))
                .into_iter()
                .map(|line| line.into_owned())
                .collect(),
        },
    }
}

/// Index of the first item to draw so the selected post stays visible.
fn first_visible(
    posts: &[(usize, &PostItem, LaidOutPost)],
    selected: Option<usize>,
    height: u16,
) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let bottom_of_selected: u16 = posts
        .iter()
        .take(selected + 1)
        .map(|(_, _, laid_out)| laid_out.height())
        .sum();
    if bottom_of_selected > height {
        selected.min(posts.len().saturating_sub(1))
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostId;
    use crate::test_support::sample_post;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    fn draw(panel: &PostsPanel, selected: Option<usize>, height: u16) -> (String, HitMap) {
        let backend = TestBackend::new(60, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = HitMap::default();
        terminal
            .draw(|f| {
                PostList::new(panel, "User1's Posts", selected, &mut hits).render(f, f.area())
            })
            .unwrap();
        (buffer_text(terminal.backend().buffer()), hits)
    }

    #[test]
    fn test_placeholder_when_no_posts() {
        let mut panel = PostsPanel::default();
        panel.render(&[]);
        let (text, _) = draw(&panel, None, 10);
        assert!(text.contains("User1's Posts"));
        assert!(text.contains("User has no posts"));
    }

    #[test]
    fn test_titles_are_clickable() {
        let mut panel = PostsPanel::default();
        panel.render(&[sample_post(42)]);
        let (text, hits) = draw(&panel, None, 12);

        assert!(text.contains("Post number 42"));
        assert_eq!(
            hits.target_at(Position::new(3, 1)),
            Some(HitTarget::PostTitle(PostId(42)))
        );
        assert_eq!(hits.target_at(Position::new(3, 0)), Some(HitTarget::PostsHeader));
    }

    #[test]
    fn test_collapsed_section_hides_items() {
        let mut panel = PostsPanel::default();
        panel.render(&[sample_post(42)]);
        panel.toggle();
        let (text, hits) = draw(&panel, None, 12);

        assert!(text.contains("▸ User1's Posts"));
        assert!(!text.contains("Post number 42"));
        assert_eq!(hits.target_at(Position::new(3, 1)), None);
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut panel = PostsPanel::default();
        let posts: Vec<_> = (1..=6).map(sample_post).collect();
        panel.render(&posts);

        let (text, hits) = draw(&panel, Some(5), 8);
        assert!(text.contains("Post number 6"));
        assert_eq!(
            hits.target_at(Position::new(3, 1)),
            Some(HitTarget::PostTitle(PostId(6)))
        );
    }
}
