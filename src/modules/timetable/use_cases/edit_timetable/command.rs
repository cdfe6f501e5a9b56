// Timetable edits as they arrive from a client: day and slot are still labels.

use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::schedule::RawSchedule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignSlot {
    pub teacher_id: String,
    pub day: String,
    pub slot: String,
    pub assignment: Option<ClassAssignment>,
    pub assigned_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceTimetable {
    pub teacher_id: String,
    pub timetable: RawSchedule,
    pub replaced_at: i64,
}
