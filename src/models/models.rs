use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub avatar: String,
    pub followers: Vec<String>,
    pub following: Vec<String>,
    pub posts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub image_url: String,
    pub caption: String,
    pub likes: Vec<String>,
    pub comments: Vec<Comment>,
    pub timestamp: i64,
}

/// `username` is a snapshot taken at comment time. It is not rewritten when
/// the commenting user renames, so it can go stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub text: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Comment,
    Follow,
}

/// Derived from stored posts and users on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub actor_id: String,
    pub actor_username: String,
    pub post_id: Option<String>,
    pub text: Option<String>,
    pub timestamp: i64,
}
