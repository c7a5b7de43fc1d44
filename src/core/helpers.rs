use uuid::Uuid;

/// Collision-resistant id for new entities. Seeded records keep their
/// fixed short ids, so ids are opaque strings everywhere else.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
