//! Wall-clock adapter.

use crate::ports::clock_port::ClockPort;
use chrono::NaiveDateTime;

pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
