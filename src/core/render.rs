//! # Renderers
//!
//! Map fetched records to display state. Each `render` clears and
//! repopulates, so nothing from a previous user survives.
//!
//! ```text
//! UserRecord      ──▶ ProfilePanel  (image, text block, section headers)
//! [PostRecord]    ──▶ PostsPanel    (title + excerpt, tagged with post id)
//! [TodoRecord]    ──▶ TodosPanel    (text, completed marker)
//! ```

use crate::content::{PostId, PostRecord, TodoRecord, UserRecord};

/// Body characters kept in a post excerpt.
pub const EXCERPT_CHARS: usize = 100;
pub const NO_POSTS: &str = "User has no posts";
pub const NO_TODOS: &str = "User has no todos";
/// Visual class applied to completed todos.
pub const COMPLETED_CLASS: &str = "completed";

const DEFAULT_POSTS_HEADER: &str = "Posts";
const DEFAULT_TODOS_HEADER: &str = "To Dos";

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub image_src: String,
    pub image_alt: String,
    pub name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
}

/// Profile card plus the two section headers it relabels.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfilePanel {
    pub view: Option<ProfileView>,
    pub posts_header: String,
    pub todos_header: String,
}

impl Default for ProfilePanel {
    fn default() -> Self {
        Self {
            view: None,
            posts_header: DEFAULT_POSTS_HEADER.to_string(),
            todos_header: DEFAULT_TODOS_HEADER.to_string(),
        }
    }
}

impl ProfilePanel {
    pub fn render(&mut self, user: &UserRecord) {
        let name = user.full_name();
        self.view = Some(ProfileView {
            image_src: user.image_url.clone(),
            image_alt: name.clone(),
            name,
            age: user.age,
            email: user.email.clone(),
            phone: user.phone.clone(),
        });
        self.posts_header = format!("{}'s Posts", user.first_name);
        self.todos_header = format!("{}'s To Dos", user.first_name);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PostItem {
    Placeholder,
    Post {
        id: PostId,
        title: String,
        excerpt: String,
    },
}

impl PostItem {
    /// The id tag used to open the detail overlay.
    pub fn post_id(&self) -> Option<PostId> {
        match self {
            PostItem::Placeholder => None,
            PostItem::Post { id, .. } => Some(*id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostsPanel {
    pub items: Vec<PostItem>,
    pub expanded: bool,
}

impl Default for PostsPanel {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            expanded: true,
        }
    }
}

impl PostsPanel {
    pub fn render(&mut self, posts: &[PostRecord]) {
        self.items.clear();
        if posts.is_empty() {
            self.items.push(PostItem::Placeholder);
            return;
        }
        self.items.extend(posts.iter().map(|post| PostItem::Post {
            id: post.id,
            title: post.title.clone(),
            excerpt: excerpt(&post.body),
        }));
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Ids of the rendered posts, in display order.
    pub fn post_ids(&self) -> Vec<PostId> {
        self.items.iter().filter_map(PostItem::post_id).collect()
    }
}

/// First `EXCERPT_CHARS` characters of `body`, always followed by `...`.
pub fn excerpt(body: &str) -> String {
    let head: String = body.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}

#[derive(Debug, Clone, PartialEq)]
pub enum TodoItem {
    Placeholder,
    Todo { text: String, completed: bool },
}

impl TodoItem {
    pub fn text(&self) -> &str {
        match self {
            TodoItem::Placeholder => NO_TODOS,
            TodoItem::Todo { text, .. } => text,
        }
    }

    pub fn class(&self) -> Option<&'static str> {
        match self {
            TodoItem::Todo { completed: true, .. } => Some(COMPLETED_CLASS),
            _ => None,
        }
    }

    pub fn is_struck_through(&self) -> bool {
        matches!(self, TodoItem::Todo { completed: true, .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TodosPanel {
    pub items: Vec<TodoItem>,
    pub expanded: bool,
    /// Index of the first item drawn.
    pub offset: usize,
}

impl Default for TodosPanel {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            expanded: true,
            offset: 0,
        }
    }
}

impl TodosPanel {
    pub fn render(&mut self, todos: &[TodoRecord]) {
        self.items.clear();
        self.offset = 0;
        if todos.is_empty() {
            self.items.push(TodoItem::Placeholder);
            return;
        }
        self.items.extend(todos.iter().map(|todo| TodoItem::Todo {
            text: todo.text.clone(),
            completed: todo.completed,
        }));
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Moves the first drawn item down, keeping the last item reachable.
    pub fn scroll_down(&mut self) {
        if self.offset + 1 < self.items.len() {
            self.offset += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }
}
