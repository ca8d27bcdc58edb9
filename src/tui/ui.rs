use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::modal::ModalState;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, PostList, PostModal, ProfileCard, TodoList};

const HELP: &str =
    " ←/→ user  ↑/↓ select post  Enter open  PgUp/PgDn todos  p/t toggle  Esc close  q quit ";

/// Draws the whole page and rebuilds the hit map to match it.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};

    tui.hits.clear();

    let layout = Layout::vertical([Length(1), Length(7), Min(0), Length(1)]);
    let [header_area, profile_area, lists_area, help_area] = layout.areas(frame.area());
    let [posts_area, todos_area] =
        Layout::horizontal([Percentage(50), Percentage(50)]).areas(lists_area);

    let status = match app.modal.state() {
        ModalState::Loading(id) => format!("Loading post {id}..."),
        _ => app.status_message.clone(),
    };

    Header::new(app.navigation.current(), &status, &mut tui.hits).render(frame, header_area);
    ProfileCard::new(&app.profile).render(frame, profile_area);
    PostList::new(
        &app.posts,
        &app.profile.posts_header,
        app.selected_post,
        &mut tui.hits,
    )
    .render(frame, posts_area);
    TodoList::new(&app.todos, &app.profile.todos_header, &mut tui.hits).render(frame, todos_area);

    frame.render_widget(
        Paragraph::new(Line::from(HELP)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    if let ModalState::Open(post) = app.modal.state() {
        PostModal::new(post, &mut tui.hits).render(frame, frame.area());
    }
}
