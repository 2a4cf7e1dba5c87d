use serde::{Deserialize, Serialize};

/// The tenant scoping entity. Members, events and prayer times all belong to
/// exactly one mosque.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mosque {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
}
