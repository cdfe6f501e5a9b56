// Manually set teacher status.
//
// Notes
// - Stored on the teacher. The value shown to users is derived in presence.rs.
// - Accepted spellings: the enumeration name ("ON_BREAK") and the display label ("On a Break").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeacherStatus {
    Available,
    InClass,
    OnBreak,
    OnHoliday,
    Unavailable,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid status: {0:?}")]
pub struct StatusParseError(pub String);

impl TeacherStatus {
    pub const ALL: [TeacherStatus; 5] = [
        TeacherStatus::Available,
        TeacherStatus::InClass,
        TeacherStatus::OnBreak,
        TeacherStatus::OnHoliday,
        TeacherStatus::Unavailable,
    ];

    pub fn code(self) -> &'static str {
        match self {
            TeacherStatus::Available => "AVAILABLE",
            TeacherStatus::InClass => "IN_CLASS",
            TeacherStatus::OnBreak => "ON_BREAK",
            TeacherStatus::OnHoliday => "ON_HOLIDAY",
            TeacherStatus::Unavailable => "UNAVAILABLE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeacherStatus::Available => "Available in Staff Room",
            TeacherStatus::InClass => "In a Class",
            TeacherStatus::OnBreak => "On a Break",
            TeacherStatus::OnHoliday => "On Holiday",
            TeacherStatus::Unavailable => "Unavailable",
        }
    }
}

impl fmt::Display for TeacherStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TeacherStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TeacherStatus::ALL
            .into_iter()
            .find(|status| status.code() == wanted || status.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StatusParseError(s.to_string()))
    }
}
