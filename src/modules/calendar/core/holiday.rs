// Holidays of the academic year.
//
// Notes
// - Dates are written either as a single day ("2024-10-02") or as a range of days within one
//   month ("2024-10-15-20"). Both bounds are inclusive.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    Public,
    Academic,
    Festival,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("malformed date range: {0:?}")]
    Malformed(String),
    #[error("date out of range: {0:?}")]
    OutOfRange(String),
    #[error("range ends before it starts: {0:?}")]
    Reversed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub kind: HolidayKind,
    pub description: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl Holiday {
    pub fn new(
        name: impl Into<String>,
        kind: HolidayKind,
        description: Option<&str>,
        date_range: &str,
    ) -> Result<Self, DateRangeError> {
        let (starts_on, ends_on) = parse_date_range(date_range)?;
        Ok(Self {
            name: name.into(),
            kind,
            description: description.map(str::to_string),
            starts_on,
            ends_on,
        })
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.ends_on
    }

    pub fn days(&self) -> i64 {
        (self.ends_on - self.starts_on).num_days() + 1
    }
}

/// Parse `YYYY-MM-DD` or `YYYY-MM-DD-DD` into inclusive bounds.
pub fn parse_date_range(input: &str) -> Result<(NaiveDate, NaiveDate), DateRangeError> {
    let malformed = || DateRangeError::Malformed(input.to_string());
    let parts: Vec<u32> = input
        .trim()
        .split('-')
        .map(|part| part.parse::<u32>().map_err(|_| malformed()))
        .collect::<Result<_, _>>()?;

    let (year, month, first, last) = match parts.as_slice() {
        [year, month, day] => (*year, *month, *day, *day),
        [year, month, first, last] => (*year, *month, *first, *last),
        _ => return Err(malformed()),
    };
    let year = i32::try_from(year).map_err(|_| malformed())?;

    let date = |day| {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| DateRangeError::OutOfRange(input.to_string()))
    };
    let (starts_on, ends_on) = (date(first)?, date(last)?);
    if ends_on < starts_on {
        return Err(DateRangeError::Reversed(input.to_string()));
    }
    Ok((starts_on, ends_on))
}
