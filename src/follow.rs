use crate::core::errors::{StoreError, StoreResult};
use crate::models::models::User;
use crate::session;
use crate::store::Store;
use crate::users;

/// Adds `followee_id` to the follower's `following` and the follower to
/// the followee's `followers`. Idempotent; self-follow is rejected.
pub fn follow_user(store: &Store, follower_id: &str, followee_id: &str) -> StoreResult<()> {
    if follower_id == followee_id {
        return Err(StoreError::InvalidInput("cannot follow yourself".to_string()));
    }

    let mut follower = require_user(store, follower_id)?;
    let mut followee = require_user(store, followee_id)?;

    if !follower.following.contains(&followee.id) {
        follower.following.push(followee.id.clone());
        users::save_user(store, &follower)?;
    }
    if !followee.followers.contains(&follower.id) {
        followee.followers.push(follower.id.clone());
        users::save_user(store, &followee)?;
    }

    session::refresh_current_user(store)?;
    Ok(())
}

pub fn unfollow_user(store: &Store, follower_id: &str, followee_id: &str) -> StoreResult<()> {
    let mut follower = require_user(store, follower_id)?;
    let mut followee = require_user(store, followee_id)?;

    follower.following.retain(|id| id != followee_id);
    followee.followers.retain(|id| id != follower_id);
    users::save_user(store, &follower)?;
    users::save_user(store, &followee)?;

    session::refresh_current_user(store)?;
    Ok(())
}

/// Resolves follower ids to records; dangling ids are skipped.
pub fn get_followers(store: &Store, user_id: &str) -> StoreResult<Vec<User>> {
    let user = require_user(store, user_id)?;
    resolve(store, &user.followers)
}

pub fn get_following(store: &Store, user_id: &str) -> StoreResult<Vec<User>> {
    let user = require_user(store, user_id)?;
    resolve(store, &user.following)
}

fn require_user(store: &Store, user_id: &str) -> StoreResult<User> {
    users::get_user_by_id(store, user_id)?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))
}

fn resolve(store: &Store, ids: &[String]) -> StoreResult<Vec<User>> {
    let mut found = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(user) = users::get_user_by_id(store, id)? {
            found.push(user);
        }
    }
    Ok(found)
}
