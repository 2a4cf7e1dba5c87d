pub mod clock;
pub mod resolver;

pub use clock::parse_clock_minutes;
pub use resolver::{minutes_until, resolve_next};
