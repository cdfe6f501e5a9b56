// Presence resolution: what to show as a teacher's current status.
//
// Purpose
// - Combine the wall clock, the weekly schedule and the manually set status.
//
// Rules
// - A class in session wins: the effective status is InClass whatever was set manually.
// - Otherwise the manual status is shown, and Available is offered as a suggestion unless the
//   teacher is on holiday. A suggestion is never written back; callers flag it when it differs
//   from the manual status.
//
// Boundaries
// - Pure. Recomputed on every call, so a committed status change is picked up on the next one.

use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::schedule::Schedule;
use crate::modules::timetable::core::status::TeacherStatus;
use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::core::time_slot::{TimeSlot, resolve_slot};
use crate::modules::timetable::core::weekday::Weekday;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presence {
    pub manual: TeacherStatus,
    pub effective: TeacherStatus,
    pub auto_suggestion: Option<TeacherStatus>,
    pub active_slot: Option<TimeSlot>,
    pub active_class: Option<ClassAssignment>,
}

impl Presence {
    /// The suggestion disagrees with what the teacher set.
    pub fn is_overridable(&self) -> bool {
        self.auto_suggestion
            .is_some_and(|suggestion| suggestion != self.manual)
    }
}

pub fn resolve(now: NaiveDateTime, schedule: &Schedule, manual: TeacherStatus) -> Presence {
    let active_slot = resolve_slot(now.time());
    let active_class = match (Weekday::of(&now), active_slot) {
        (Some(today), Some(slot)) => schedule.get_assignment(today, slot).cloned(),
        _ => None,
    };

    if active_class.is_some() {
        return Presence {
            manual,
            effective: TeacherStatus::InClass,
            auto_suggestion: Some(TeacherStatus::InClass),
            active_slot,
            active_class,
        };
    }

    let auto_suggestion = match manual {
        TeacherStatus::OnHoliday => None,
        _ => Some(TeacherStatus::Available),
    };
    Presence {
        manual,
        effective: manual,
        auto_suggestion,
        active_slot,
        active_class: None,
    }
}

/// Presence of a teacher record. Without a timetable nothing can be suggested.
pub fn resolve_for_teacher(now: NaiveDateTime, teacher: &Teacher) -> Presence {
    match &teacher.timetable {
        Some(schedule) => resolve(now, schedule, teacher.status),
        None => Presence {
            manual: teacher.status,
            effective: teacher.status,
            auto_suggestion: None,
            active_slot: resolve_slot(now.time()),
            active_class: None,
        },
    }
}
