use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::time_slot::TimeSlot;
use crate::modules::timetable::core::weekday::Weekday;
use serde::{Deserialize, Serialize};

/// One timetable cell written. `assignment: None` clears the cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlotAssignedV1 {
    pub teacher_id: String,
    pub day: Weekday,
    pub slot: TimeSlot,
    pub assignment: Option<ClassAssignment>,
    pub assigned_at: i64,
}
