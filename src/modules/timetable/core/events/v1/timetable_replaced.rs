use crate::modules::timetable::core::schedule::Schedule;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimetableReplacedV1 {
    pub teacher_id: String,
    pub timetable: Schedule,
    pub replaced_at: i64,
}
