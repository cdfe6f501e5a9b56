use crate::modules::timetable::core::status::TeacherStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdatedV1 {
    pub teacher_id: String,
    pub previous: TeacherStatus,
    pub status: TeacherStatus,
    pub updated_at: i64,
}
