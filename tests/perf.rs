use std::time::Instant;

use gram::store::Store;
use gram::{posts, users};

const NUM_USERS: usize = 100;
const POSTS_PER_USER: usize = 2;
const LOADED_USER_POSTS: usize = 50;

#[ignore]
#[test]
fn perf_users_with_posts() {
    let store = Store::in_memory();
    let start = Instant::now();

    println!("\n=== Performance Test ===");
    println!("Creating {} users with {} posts each...", NUM_USERS, POSTS_PER_USER);

    let user_creation_start = Instant::now();
    let mut user_ids = Vec::with_capacity(NUM_USERS);
    for i in 0..NUM_USERS {
        let username = format!("perf_user_{}", i);
        let user = users::create_user(&store, &username, "perf@example.com", "")
            .expect("Failed to create user");
        user_ids.push(user.id);
    }
    println!("Users created in {:?}", user_creation_start.elapsed());

    let post_creation_start = Instant::now();
    for user_id in &user_ids {
        for n in 0..POSTS_PER_USER {
            posts::create_post(
                &store,
                user_id,
                "https://example.com/perf.jpg",
                &format!("perf post {}", n),
            )
            .expect("Failed to create post");
        }
    }
    println!("Posts created in {:?}", post_creation_start.elapsed());

    // One heavily loaded user to exercise the per-user scan
    let loaded = users::create_user(&store, "perf_loaded_user", "loaded@example.com", "")
        .expect("Failed to create loaded user");
    for n in 0..LOADED_USER_POSTS {
        posts::create_post(&store, &loaded.id, "https://example.com/perf.jpg", &format!("{}", n))
            .expect("Failed to create post");
    }

    let read_start = Instant::now();
    let feed = posts::feed(&store).expect("Failed to read feed");
    let mine = posts::get_posts_by_user_id(&store, &loaded.id).expect("Failed to read user posts");
    println!(
        "Read {} feed posts and {} user posts in {:?}",
        feed.len(),
        mine.len(),
        read_start.elapsed()
    );

    assert_eq!(feed.len(), NUM_USERS * POSTS_PER_USER + LOADED_USER_POSTS);
    assert_eq!(mine.len(), LOADED_USER_POSTS);
    println!("Total: {:?}", start.elapsed());
}
