// Wall-clock port.
//
// Purpose
// - Give handlers "now" without reading the system clock themselves, so presence can be
//   resolved for any instant in tests.
//
// Notes
// - Times are local wall-clock readings without a timezone; the timetable has none either.

use chrono::{Local, NaiveDateTime};
use std::sync::Mutex;

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Epoch milliseconds of `now`, for event timestamps.
    fn now_millis(&self) -> i64 {
        self.now().and_utc().timestamp_millis()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that reads whatever it was last set to.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        let mut guard = self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
