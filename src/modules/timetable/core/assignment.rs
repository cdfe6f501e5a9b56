use serde::{Deserialize, Serialize};

/// A class taught in one timetable cell. An empty cell is a free period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub subject: String,
    pub class: String,
    pub room: String,
}

impl ClassAssignment {
    pub fn new(
        subject: impl Into<String>,
        class: impl Into<String>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            class: class.into(),
            room: room.into(),
        }
    }

    /// Editor input: all three fields blank clears the cell.
    pub fn from_fields(subject: &str, class: &str, room: &str) -> Option<Self> {
        let (subject, class, room) = (subject.trim(), class.trim(), room.trim());
        if subject.is_empty() && class.is_empty() && room.is_empty() {
            return None;
        }
        Some(Self::new(subject, class, room))
    }
}
