use serde::{Deserialize, Serialize};

use crate::models::PrayerEntry;

/// Dashboard aggregate for one mosque. Serialized shape matches the summary
/// endpoint's JSON: `nextPrayer` (object or null), `memberCount`,
/// `upcomingEventCount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MosqueSummary {
    pub next_prayer: Option<PrayerEntry>,
    pub member_count: u64,
    pub upcoming_event_count: u64,
}
