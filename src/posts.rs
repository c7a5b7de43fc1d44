use tracing::debug;

use crate::config::*;
use crate::core::errors::{StoreError, StoreResult};
use crate::core::helpers::{new_id, now_millis};
use crate::events::ChangeEvent;
use crate::models::models::{Comment, Post, User};
use crate::store::Store;
use crate::users;

/// Point-write of one post record, same replace-or-append contract as
/// `users::save_user`. `user_id` is not checked against the user index.
pub fn save_post(store: &Store, post: &Post) -> StoreResult<()> {
    let mut index: Vec<String> = store.get_json(POSTS_INDEX_KEY)?.unwrap_or_default();
    if !index.contains(&post.id) {
        index.push(post.id.clone());
        store.set_json(POSTS_INDEX_KEY, &index)?;
    }
    store.set_json(&post_key(&post.id), post)?;
    debug!(post_id = %post.id, "saved post");
    store.publish(ChangeEvent::posts(&post.id));
    Ok(())
}

pub fn get_posts(store: &Store) -> StoreResult<Vec<Post>> {
    let index: Vec<String> = store.get_json(POSTS_INDEX_KEY)?.unwrap_or_default();
    let mut posts = Vec::with_capacity(index.len());
    for id in &index {
        if let Some(post) = store.get_json::<Post>(&post_key(id))? {
            posts.push(post);
        }
    }
    Ok(posts)
}

pub fn get_post_by_id(store: &Store, id: &str) -> StoreResult<Option<Post>> {
    store.get_json(&post_key(id))
}

/// Insertion order; sorting is the caller's job.
pub fn get_posts_by_user_id(store: &Store, user_id: &str) -> StoreResult<Vec<Post>> {
    let mut posts = get_posts(store)?;
    posts.retain(|post| post.user_id == user_id);
    Ok(posts)
}

pub fn create_post(
    store: &Store,
    author_id: &str,
    image_url: &str,
    caption: &str,
) -> StoreResult<Post> {
    if image_url.is_empty() {
        return Err(StoreError::InvalidInput("image is required".to_string()));
    }
    if image_url.starts_with("data:") && image_url.len() > MAX_IMAGE_DATA_BYTES {
        return Err(StoreError::InvalidInput("image larger than 10MB".to_string()));
    }
    if caption.len() > MAX_CAPTION_LENGTH {
        return Err(StoreError::InvalidInput(format!(
            "caption too long (max {} chars)",
            MAX_CAPTION_LENGTH
        )));
    }

    let mut author = users::get_user_by_id(store, author_id)?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", author_id)))?;

    let post = Post {
        id: new_id(),
        user_id: author.id.clone(),
        image_url: image_url.to_string(),
        caption: caption.to_string(),
        likes: Vec::new(),
        comments: Vec::new(),
        timestamp: now_millis(),
    };

    save_post(store, &post)?;

    author.posts.push(post.id.clone());
    users::save_user(store, &author)?;

    Ok(post)
}

/// Like if not yet liked, unlike otherwise. The toggle is the only
/// duplicate prevention for like entries.
pub fn toggle_like(store: &Store, post_id: &str, user_id: &str) -> StoreResult<Post> {
    let mut post = get_post_by_id(store, post_id)?
        .ok_or_else(|| StoreError::NotFound(format!("post {}", post_id)))?;

    if post.likes.iter().any(|id| id == user_id) {
        post.likes.retain(|id| id != user_id);
    } else {
        post.likes.push(user_id.to_string());
    }

    save_post(store, &post)?;
    Ok(post)
}

pub fn add_comment(
    store: &Store,
    post_id: &str,
    author: &User,
    text: &str,
) -> StoreResult<Comment> {
    let text = text.trim();
    if text.is_empty() || text.len() > MAX_COMMENT_LENGTH {
        return Err(StoreError::InvalidInput(format!(
            "comment must be 1-{} chars",
            MAX_COMMENT_LENGTH
        )));
    }

    let mut post = get_post_by_id(store, post_id)?
        .ok_or_else(|| StoreError::NotFound(format!("post {}", post_id)))?;

    let comment = Comment {
        id: new_id(),
        user_id: author.id.clone(),
        // Username snapshot; stays as written even if the author renames.
        username: author.username.clone(),
        text: text.to_string(),
        timestamp: now_millis(),
    };

    post.comments.push(comment.clone());
    save_post(store, &post)?;
    Ok(comment)
}

/// Removes the record, its index entry and the id from the owner's post
/// list. Likes and comments go with the record.
pub fn delete_post(store: &Store, post_id: &str) -> StoreResult<()> {
    let post = get_post_by_id(store, post_id)?
        .ok_or_else(|| StoreError::NotFound(format!("post {}", post_id)))?;

    store.delete(&post_key(post_id))?;

    let mut index: Vec<String> = store.get_json(POSTS_INDEX_KEY)?.unwrap_or_default();
    index.retain(|id| id != post_id);
    store.set_json(POSTS_INDEX_KEY, &index)?;

    if let Some(mut owner) = users::get_user_by_id(store, &post.user_id)? {
        owner.posts.retain(|id| id != post_id);
        users::save_user(store, &owner)?;
    }

    debug!(post_id, "deleted post");
    store.publish(ChangeEvent::posts(post_id));
    Ok(())
}

/// All posts, newest first. Timestamp is the sole sort key.
pub fn feed(store: &Store) -> StoreResult<Vec<Post>> {
    let mut posts = get_posts(store)?;
    posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(posts)
}
