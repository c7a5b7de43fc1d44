//! gram: an embedded feed store.
//!
//! Users, posts, likes, comments, follows and a current-user snapshot,
//! persisted as JSON blobs in a key-value medium (flat files on disk, or
//! memory). Mutations publish typed change events; listeners re-read and
//! re-render. Single-threaded synchronous discipline throughout: every
//! operation runs to completion before returning, and nothing here makes
//! two operations interleave safely across processes.

pub mod config;
pub mod core;
pub mod events;
pub mod follow;
pub mod models;
pub mod notifications;
pub mod posts;
pub mod session;
pub mod store;
pub mod users;
