// Teaching days of the week.
//
// Purpose
// - Fixed, ordered set of the six days a timetable covers. Sunday is not a teaching day.
//
// Boundaries
// - No timezone dimension. Callers hand in a local date or a chrono weekday.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown weekday: {0}")]
pub struct UnknownWeekday(pub String);

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Position in [`Weekday::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Teaching day of a calendar date, `None` on Sundays.
    pub fn of(date: &impl Datelike) -> Option<Weekday> {
        Weekday::from_chrono(date.weekday())
    }

    pub fn from_chrono(day: chrono::Weekday) -> Option<Weekday> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat => Some(Weekday::Saturday),
            chrono::Weekday::Sun => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}
