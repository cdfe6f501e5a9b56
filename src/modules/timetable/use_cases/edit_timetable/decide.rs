// Pure decision functions for timetable edits.
//
// Responsibilities
// - Parse day and slot labels once, here.
// - Normalise an uploaded timetable to the full grid before it becomes an event.
// - The teacher must exist. The manual status is never touched.

use crate::modules::timetable::core::events::TeacherEvent;
use crate::modules::timetable::core::events::v1::slot_assigned::SlotAssignedV1;
use crate::modules::timetable::core::events::v1::timetable_replaced::TimetableReplacedV1;
use crate::modules::timetable::core::schedule::{Schedule, ScheduleError};
use crate::modules::timetable::core::state::TeacherState;
use crate::modules::timetable::core::time_slot::TimeSlot;
use crate::modules::timetable::core::weekday::Weekday;
use crate::modules::timetable::use_cases::decision::{DecideError, Decision};
use crate::modules::timetable::use_cases::edit_timetable::command::{AssignSlot, ReplaceTimetable};

fn rejected(reason: DecideError) -> Decision {
    Decision::Rejected { reason }
}

pub fn decide_assign_slot(state: &TeacherState, command: AssignSlot) -> Decision {
    let Ok(day) = command.day.parse::<Weekday>() else {
        return rejected(DecideError::UnknownDay(command.day));
    };
    let Ok(slot) = command.slot.parse::<TimeSlot>() else {
        return rejected(DecideError::UnknownSlot(command.slot));
    };
    let Some(teacher) = state.teacher() else {
        return rejected(DecideError::UnknownTeacher(command.teacher_id));
    };

    Decision::Accepted {
        events: vec![TeacherEvent::SlotAssignedV1(SlotAssignedV1 {
            teacher_id: teacher.teacher_id.clone(),
            day,
            slot,
            assignment: command.assignment,
            assigned_at: command.assigned_at,
        })],
    }
}

pub fn decide_replace_timetable(state: &TeacherState, command: ReplaceTimetable) -> Decision {
    let timetable = match Schedule::replace_schedule(command.timetable) {
        Ok(timetable) => timetable,
        Err(ScheduleError::MalformedSchedule(detail)) => {
            return rejected(DecideError::MalformedSchedule(detail));
        }
    };
    let Some(teacher) = state.teacher() else {
        return rejected(DecideError::UnknownTeacher(command.teacher_id));
    };

    Decision::Accepted {
        events: vec![TeacherEvent::TimetableReplacedV1(TimetableReplacedV1 {
            teacher_id: teacher.teacher_id.clone(),
            timetable,
            replaced_at: command.replaced_at,
        })],
    }
}
