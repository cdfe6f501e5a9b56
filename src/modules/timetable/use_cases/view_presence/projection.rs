// Read models for dashboards: a teacher with its resolved presence, and the timetable grid as
// a viewer paints it at one instant.

use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::presence::{Presence, resolve_for_teacher};
use crate::modules::timetable::core::schedule::{CellState, Schedule};
use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::core::time_slot::{TimeSlot, resolve_slot};
use crate::modules::timetable::core::weekday::Weekday;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherPresenceView {
    pub teacher_id: String,
    pub full_name: String,
    pub department: String,
    pub designation: String,
    pub staff_room: String,
    pub presence: Presence,
    pub overridable: bool,
}

impl TeacherPresenceView {
    pub fn at(now: NaiveDateTime, teacher: &Teacher) -> Self {
        let presence = resolve_for_teacher(now, teacher);
        Self {
            teacher_id: teacher.teacher_id.clone(),
            full_name: teacher.full_name.clone(),
            department: teacher.department.clone(),
            designation: teacher.designation.clone(),
            staff_room: teacher.staff_room.clone(),
            overridable: presence.is_overridable(),
            presence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub day: Weekday,
    pub state: CellState,
    pub assignment: Option<ClassAssignment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub slot: TimeSlot,
    pub is_current: bool,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableView {
    pub teacher_id: String,
    pub has_timetable: bool,
    pub today: Option<Weekday>,
    pub current_slot: Option<TimeSlot>,
    pub classes_today: usize,
    pub rows: Vec<RowView>,
}

impl TimetableView {
    pub fn at(now: NaiveDateTime, teacher: &Teacher) -> Self {
        let empty = Schedule::empty();
        let schedule = teacher.timetable.as_ref().unwrap_or(&empty);
        let today = Weekday::of(&now);
        let current_slot = resolve_slot(now.time());

        let rows = TimeSlot::ALL
            .into_iter()
            .map(|slot| RowView {
                slot,
                is_current: current_slot == Some(slot),
                cells: Weekday::ALL
                    .into_iter()
                    .map(|day| CellView {
                        day,
                        state: schedule.cell_state(day, slot, now),
                        assignment: schedule.get_assignment(day, slot).cloned(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            teacher_id: teacher.teacher_id.clone(),
            has_timetable: teacher.timetable.is_some(),
            today,
            current_slot,
            classes_today: today.map_or(0, |day| schedule.classes_on(day).len()),
            rows,
        }
    }
}
