use std::path::PathBuf;

pub const USERS_INDEX_KEY: &str = "users";
pub const POSTS_INDEX_KEY: &str = "posts";
pub const CURRENT_USER_KEY: &str = "current_user";

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MAX_BIO_LENGTH: usize = 500;
pub const MAX_CAPTION_LENGTH: usize = 2200;
pub const MAX_COMMENT_LENGTH: usize = 500;

// Inline data URIs (uploaded images) are capped; external URLs are not.
pub const MAX_IMAGE_DATA_BYTES: usize = 10 * 1024 * 1024;

pub fn user_key(id: &str) -> String {
    format!("user:{}", id)
}

pub fn post_key(id: &str) -> String {
    format!("post:{}", id)
}

pub fn data_dir() -> PathBuf {
    std::env::var("GRAM_DATA_DIR")
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gram-data"))
}
