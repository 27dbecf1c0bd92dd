//! Clock port trait.
//!
//! "Now" is an injected dependency so that transaction construction stays
//! deterministic under test.

use chrono::NaiveDateTime;

pub trait ClockPort {
    fn now(&self) -> NaiveDateTime;
}
