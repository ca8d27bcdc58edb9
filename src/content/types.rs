use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub phone: String,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl UserRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: PostId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub views: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TodoRecord {
    pub id: u64,
    #[serde(rename = "todo")]
    pub text: String,
    pub completed: bool,
}

/// `GET /users/{id}/posts` wraps its list.
#[derive(Deserialize, Debug)]
pub(crate) struct PostsPage {
    pub posts: Vec<PostRecord>,
}

/// `GET /users/{id}/todos` wraps its list.
#[derive(Deserialize, Debug)]
pub(crate) struct TodosPage {
    pub todos: Vec<TodoRecord>,
}
