use serde::{Deserialize, Serialize};

/// A dated mosque event. `date` is a "YYYY-MM-DD" string; "upcoming" is
/// decided by plain string comparison against today's date, which is sound
/// for this zero-padded format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub mosque_id: i64,
    pub title: String,
    pub date: String,
}
