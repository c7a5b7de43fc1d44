use tracing::info;

use crate::config::*;
use crate::core::errors::StoreResult;
use crate::core::helpers::now_millis;
use crate::models::models::{Comment, Post, User};
use crate::posts::save_post;
use crate::store::Store;
use crate::users::save_user;

const DAY_MS: i64 = 86_400_000;

/// Seeds three users and six cross-referencing posts so a fresh install
/// has something to render. Runs only when the user index is empty, so
/// calling it again is a no-op.
pub fn initialize_sample_data(store: &Store) -> StoreResult<()> {
    let existing: Vec<String> = store.get_json(USERS_INDEX_KEY)?.unwrap_or_default();
    if !existing.is_empty() {
        return Ok(());
    }

    let now = now_millis();
    for user in sample_users() {
        save_user(store, &user)?;
    }
    for post in sample_posts(now) {
        save_post(store, &post)?;
    }

    info!("seeded sample data");
    Ok(())
}

/// Clears every record, both indexes and the session snapshot.
pub fn reset_data(store: &Store) -> StoreResult<()> {
    let user_ids: Vec<String> = store.get_json(USERS_INDEX_KEY)?.unwrap_or_default();
    for id in &user_ids {
        store.delete(&user_key(id))?;
    }

    let post_ids: Vec<String> = store.get_json(POSTS_INDEX_KEY)?.unwrap_or_default();
    for id in &post_ids {
        store.delete(&post_key(id))?;
    }

    store.delete(USERS_INDEX_KEY)?;
    store.delete(POSTS_INDEX_KEY)?;
    store.delete(CURRENT_USER_KEY)?;

    Ok(())
}

fn sample_user(
    id: &str,
    username: &str,
    email: &str,
    bio: &str,
    avatar: &str,
    followers: &[&str],
    following: &[&str],
    posts: &[&str],
) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        email: email.to_string(),
        bio: bio.to_string(),
        avatar: avatar.to_string(),
        followers: followers.iter().map(|s| s.to_string()).collect(),
        following: following.iter().map(|s| s.to_string()).collect(),
        posts: posts.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_users() -> Vec<User> {
    vec![
        sample_user(
            "1",
            "johndoe",
            "john@example.com",
            "Photography enthusiast 📸\nLove capturing moments ✨",
            "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=150",
            &["2", "3"],
            &["2"],
            &["1", "2"],
        ),
        sample_user(
            "2",
            "janesmith",
            "jane@example.com",
            "Travel blogger 🌍\nExploring the world one city at a time",
            "https://images.pexels.com/photos/415829/pexels-photo-415829.jpeg?auto=compress&cs=tinysrgb&w=150",
            &["1", "3"],
            &["1", "3"],
            &["3", "4"],
        ),
        sample_user(
            "3",
            "mikejohnson",
            "mike@example.com",
            "Fitness coach 💪\nHelping you achieve your goals",
            "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150",
            &["1", "2"],
            &["1", "2"],
            &["5", "6"],
        ),
    ]
}

fn sample_comment(id: &str, user_id: &str, username: &str, text: &str, timestamp: i64) -> Comment {
    Comment {
        id: id.to_string(),
        user_id: user_id.to_string(),
        username: username.to_string(),
        text: text.to_string(),
        timestamp,
    }
}

fn sample_posts(now: i64) -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            user_id: "1".to_string(),
            image_url: "https://images.pexels.com/photos/1366919/pexels-photo-1366919.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "Beautiful sunset at the beach 🌅 #sunset #photography".to_string(),
            likes: vec!["2".to_string(), "3".to_string()],
            comments: vec![sample_comment(
                "1", "2", "janesmith", "Stunning shot! 😍", now - DAY_MS,
            )],
            timestamp: now - 2 * DAY_MS,
        },
        Post {
            id: "2".to_string(),
            user_id: "1".to_string(),
            image_url: "https://images.pexels.com/photos/417173/pexels-photo-417173.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "Mountain hiking adventure 🏔️ #hiking #nature".to_string(),
            likes: vec!["1".to_string()],
            comments: Vec::new(),
            timestamp: now - 3 * DAY_MS,
        },
        Post {
            id: "3".to_string(),
            user_id: "2".to_string(),
            image_url: "https://images.pexels.com/photos/1118873/pexels-photo-1118873.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "Exploring the streets of Paris 🇫🇷 #travel #paris".to_string(),
            likes: vec!["1".to_string(), "3".to_string()],
            comments: vec![sample_comment(
                "2", "1", "johndoe", "Amazing architecture!", now - 2 * DAY_MS,
            )],
            timestamp: now - 4 * DAY_MS,
        },
        Post {
            id: "4".to_string(),
            user_id: "2".to_string(),
            image_url: "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "Coffee and croissants ☕🥐 #foodie #breakfast".to_string(),
            likes: vec!["1".to_string()],
            comments: Vec::new(),
            timestamp: now - 5 * DAY_MS,
        },
        Post {
            id: "5".to_string(),
            user_id: "3".to_string(),
            image_url: "https://images.pexels.com/photos/416978/pexels-photo-416978.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "Morning workout session 💪 #fitness #motivation".to_string(),
            likes: vec!["1".to_string(), "2".to_string()],
            comments: vec![sample_comment(
                "3", "2", "janesmith", "Keep it up! 🔥", now - DAY_MS,
            )],
            timestamp: now - 6 * DAY_MS,
        },
        Post {
            id: "6".to_string(),
            user_id: "3".to_string(),
            image_url: "https://images.pexels.com/photos/1552242/pexels-photo-1552242.jpeg?auto=compress&cs=tinysrgb&w=800".to_string(),
            caption: "Healthy meal prep for the week 🥗 #mealprep #healthy".to_string(),
            likes: vec!["1".to_string()],
            comments: Vec::new(),
            timestamp: now - 7 * DAY_MS,
        },
    ]
}
