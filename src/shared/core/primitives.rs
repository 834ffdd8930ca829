use chrono::Utc;
use uuid::Uuid;

/// Time-ordered identifier used as the primary key of every record this crate writes.
pub fn new_id() -> String {
    Uuid::now_v7().to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
