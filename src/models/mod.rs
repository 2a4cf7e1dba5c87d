pub mod event;
pub mod member;
pub mod mosque;
pub mod prayer;
pub mod summary;

pub use event::Event;
pub use member::{Member, MemberRole};
pub use mosque::Mosque;
pub use prayer::{PrayerEntry, PrayerName};
pub use summary::MosqueSummary;
