use crate::core::errors::StoreResult;
use crate::models::models::{Notification, NotificationKind};
use crate::posts;
use crate::store::Store;
use crate::users;

/// Assembles a user's notifications from stored data: likes and comments
/// on their posts by other users, plus everyone following them. Nothing
/// is persisted and nothing is marked read.
///
/// Likes carry the liked post's timestamp since no per-like instant is
/// stored; follow entries carry no instant at all and sort last.
pub fn notifications_for(store: &Store, user_id: &str) -> StoreResult<Vec<Notification>> {
    let mut notifications = Vec::new();

    for post in posts::get_posts_by_user_id(store, user_id)? {
        for liker_id in &post.likes {
            if liker_id == user_id {
                continue;
            }
            let Some(liker) = users::get_user_by_id(store, liker_id)? else {
                continue;
            };
            notifications.push(Notification {
                kind: NotificationKind::Like,
                actor_id: liker.id,
                actor_username: liker.username,
                post_id: Some(post.id.clone()),
                text: None,
                timestamp: post.timestamp,
            });
        }

        for comment in &post.comments {
            if comment.user_id == user_id {
                continue;
            }
            notifications.push(Notification {
                kind: NotificationKind::Comment,
                actor_id: comment.user_id.clone(),
                actor_username: comment.username.clone(),
                post_id: Some(post.id.clone()),
                text: Some(comment.text.clone()),
                timestamp: comment.timestamp,
            });
        }
    }

    if let Some(user) = users::get_user_by_id(store, user_id)? {
        for follower_id in &user.followers {
            let Some(follower) = users::get_user_by_id(store, follower_id)? else {
                continue;
            };
            notifications.push(Notification {
                kind: NotificationKind::Follow,
                actor_id: follower.id,
                actor_username: follower.username,
                post_id: None,
                text: None,
                timestamp: 0,
            });
        }
    }

    notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(notifications)
}
