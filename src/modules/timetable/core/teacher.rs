use crate::modules::timetable::core::schedule::Schedule;
use crate::modules::timetable::core::status::TeacherStatus;
use serde::{Deserialize, Serialize};

/// Teacher record as held by the repository.
///
/// `timetable` is `None` until the teacher has either signed up through this service (which
/// creates an empty grid) or uploaded a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub teacher_id: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub staff_room: String,
    pub status: TeacherStatus,
    #[serde(default)]
    pub timetable: Option<Schedule>,
}

impl Teacher {
    /// Directory search: case-insensitive substring on name, department, designation or id.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            &self.full_name,
            &self.department,
            &self.designation,
            &self.teacher_id,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
