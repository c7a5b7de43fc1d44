use tracing::debug;

use crate::config::*;
use crate::core::errors::{StoreError, StoreResult};
use crate::core::helpers::new_id;
use crate::events::ChangeEvent;
use crate::models::models::User;
use crate::session;
use crate::store::Store;

/// Point-write of one user record. A matching id replaces the stored
/// record; a new id is appended to the index. Never duplicates.
pub fn save_user(store: &Store, user: &User) -> StoreResult<()> {
    let mut index: Vec<String> = store.get_json(USERS_INDEX_KEY)?.unwrap_or_default();
    if !index.contains(&user.id) {
        index.push(user.id.clone());
        store.set_json(USERS_INDEX_KEY, &index)?;
    }
    store.set_json(&user_key(&user.id), user)?;
    debug!(user_id = %user.id, "saved user");
    store.publish(ChangeEvent::users(&user.id));
    Ok(())
}

/// All users in insertion order. Index entries whose record is missing
/// are skipped silently.
pub fn get_users(store: &Store) -> StoreResult<Vec<User>> {
    let index: Vec<String> = store.get_json(USERS_INDEX_KEY)?.unwrap_or_default();
    let mut users = Vec::with_capacity(index.len());
    for id in &index {
        if let Some(user) = store.get_json::<User>(&user_key(id))? {
            users.push(user);
        }
    }
    Ok(users)
}

pub fn get_user_by_id(store: &Store, id: &str) -> StoreResult<Option<User>> {
    store.get_json(&user_key(id))
}

/// Username match is case-insensitive.
pub fn get_user_by_username(store: &Store, username: &str) -> StoreResult<Option<User>> {
    let needle = username.to_lowercase();
    let index: Vec<String> = store.get_json(USERS_INDEX_KEY)?.unwrap_or_default();
    for id in &index {
        if let Some(user) = store.get_json::<User>(&user_key(id))? {
            if user.username.to_lowercase() == needle {
                return Ok(Some(user));
            }
        }
    }
    Ok(None)
}

pub fn create_user(
    store: &Store,
    username: &str,
    email: &str,
    avatar: &str,
) -> StoreResult<User> {
    if username.len() < MIN_USERNAME_LENGTH || username.len() > MAX_USERNAME_LENGTH {
        return Err(StoreError::InvalidInput(format!(
            "username must be {}-{} characters",
            MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH
        )));
    }

    // Check duplicate username
    if get_user_by_username(store, username)?.is_some() {
        return Err(StoreError::Conflict(format!("username {} exists", username)));
    }

    let user = User {
        id: new_id(),
        username: username.to_string(),
        email: email.to_string(),
        bio: String::new(),
        avatar: avatar.to_string(),
        followers: Vec::new(),
        following: Vec::new(),
        posts: Vec::new(),
    };

    save_user(store, &user)?;
    Ok(user)
}

#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

/// Partial update of a user's own fields. Re-syncs the session snapshot
/// when it points at the updated user.
pub fn update_profile(store: &Store, user_id: &str, update: ProfileUpdate) -> StoreResult<User> {
    let mut user = get_user_by_id(store, user_id)?
        .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;

    if let Some(bio) = update.bio {
        if bio.len() > MAX_BIO_LENGTH {
            return Err(StoreError::InvalidInput(format!(
                "bio too long (max {} chars)",
                MAX_BIO_LENGTH
            )));
        }
        user.bio = bio;
    }
    if let Some(email) = update.email {
        user.email = email;
    }
    if let Some(avatar) = update.avatar {
        user.avatar = avatar;
    }

    save_user(store, &user)?;
    session::refresh_current_user(store)?;
    Ok(user)
}
