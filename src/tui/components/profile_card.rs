//! # ProfileCard Component
//!
//! Bordered block with the active user's profile. The terminal can't show
//! the avatar, so the image source is printed with its alt text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::render::ProfilePanel;
use crate::tui::component::Component;

pub struct ProfileCard<'a> {
    pub profile: &'a ProfilePanel,
}

impl<'a> ProfileCard<'a> {
    pub fn new(profile: &'a ProfilePanel) -> Self {
        Self { profile }
    }
}

impl Component for ProfileCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Profile ")
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(view) = &self.profile.view else {
            let loading = Paragraph::new("Loading profile...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(loading, area);
            return;
        };

        let label = Style::default().add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(Span::styled(
                view.name.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![Span::styled("Age: ", label), Span::raw(view.age.to_string())]),
            Line::from(vec![Span::styled("Email: ", label), Span::raw(view.email.clone())]),
            Line::from(vec![Span::styled("Phone: ", label), Span::raw(view.phone.clone())]),
            Line::from(vec![
                Span::styled("Image: ", label),
                Span::styled(view.image_src.clone(), Style::default().fg(Color::Blue)),
                Span::styled(
                    format!(" ({})", view.image_alt),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_user;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(profile: &ProfilePanel) -> String {
        let backend = TestBackend::new(80, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ProfileCard::new(profile).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_placeholder_before_first_user() {
        let text = draw(&ProfilePanel::default());
        assert!(text.contains("Loading profile..."));
    }

    #[test]
    fn test_renders_profile_fields() {
        let mut profile = ProfilePanel::default();
        profile.render(&sample_user(5));

        let text = draw(&profile);
        assert!(text.contains("User5 Tester"));
        assert!(text.contains("Age: 25"));
        assert!(text.contains("user5@example.com"));
        assert!(text.contains("https://example.com/avatar/5.png"));
    }
}
