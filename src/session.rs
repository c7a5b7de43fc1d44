//! The current user is persisted as an independent snapshot copy, not a
//! reference into the user collection. Edits to the canonical record do
//! not propagate here unless re-synced explicitly.

use tracing::debug;

use crate::config::CURRENT_USER_KEY;
use crate::core::errors::StoreResult;
use crate::events::ChangeEvent;
use crate::models::models::User;
use crate::store::Store;
use crate::users;

pub fn set_current_user(store: &Store, user: Option<&User>) -> StoreResult<()> {
    match user {
        Some(user) => {
            store.set_json(CURRENT_USER_KEY, user)?;
            store.publish(ChangeEvent::session(Some(&user.id)));
        }
        None => {
            store.delete(CURRENT_USER_KEY)?;
            store.publish(ChangeEvent::session(None));
        }
    }
    Ok(())
}

pub fn get_current_user(store: &Store) -> StoreResult<Option<User>> {
    store.get_json(CURRENT_USER_KEY)
}

/// Case-insensitive lookup; an unknown username is `Ok(None)`, not an
/// error. No credentials exist, matching a name is logging in.
pub fn login(store: &Store, username: &str) -> StoreResult<Option<User>> {
    match users::get_user_by_username(store, username)? {
        Some(user) => {
            set_current_user(store, Some(&user))?;
            debug!(user_id = %user.id, "logged in");
            Ok(Some(user))
        }
        None => Ok(None),
    }
}

pub fn logout(store: &Store) -> StoreResult<()> {
    set_current_user(store, None)
}

/// Re-copy the canonical record over the snapshot. A dangling snapshot
/// (canonical record gone) is left as-is.
pub fn refresh_current_user(store: &Store) -> StoreResult<Option<User>> {
    let Some(snapshot) = get_current_user(store)? else {
        return Ok(None);
    };
    match users::get_user_by_id(store, &snapshot.id)? {
        Some(canonical) => {
            set_current_user(store, Some(&canonical))?;
            Ok(Some(canonical))
        }
        None => Ok(Some(snapshot)),
    }
}
