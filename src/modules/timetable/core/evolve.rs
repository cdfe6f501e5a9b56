// Evolve: combine a prior state with a new event to produce the next state.
//
// Boundaries
// - No input or output. No side effects.
// - Events that do not apply to the state, or that name another teacher, leave it unchanged.

use crate::modules::timetable::core::events::TeacherEvent;
use crate::modules::timetable::core::schedule::Schedule;
use crate::modules::timetable::core::state::TeacherState;
use crate::modules::timetable::core::status::TeacherStatus;
use crate::modules::timetable::core::teacher::Teacher;

pub fn evolve(state: TeacherState, event: TeacherEvent) -> TeacherState {
    match (state, event) {
        (TeacherState::None, TeacherEvent::TeacherRegisteredV1(e)) => {
            TeacherState::Registered(Teacher {
                teacher_id: e.teacher_id,
                full_name: e.full_name,
                email: e.email,
                department: e.department,
                designation: e.designation,
                subjects: e.subjects,
                staff_room: e.staff_room,
                status: TeacherStatus::Available,
                timetable: Some(Schedule::empty()),
            })
        }
        (TeacherState::Registered(mut teacher), TeacherEvent::StatusUpdatedV1(e))
            if e.teacher_id == teacher.teacher_id =>
        {
            teacher.status = e.status;
            TeacherState::Registered(teacher)
        }
        (TeacherState::Registered(mut teacher), TeacherEvent::TimetableReplacedV1(e))
            if e.teacher_id == teacher.teacher_id =>
        {
            teacher.timetable = Some(e.timetable);
            TeacherState::Registered(teacher)
        }
        (TeacherState::Registered(mut teacher), TeacherEvent::SlotAssignedV1(e))
            if e.teacher_id == teacher.teacher_id =>
        {
            let current = teacher.timetable.take().unwrap_or_default();
            teacher.timetable = Some(current.set_assignment(e.day, e.slot, e.assignment));
            TeacherState::Registered(teacher)
        }
        (TeacherState::Registered(teacher), TeacherEvent::ProfileUpdatedV1(e))
            if e.teacher_id == teacher.teacher_id =>
        {
            TeacherState::Registered(Teacher {
                full_name: e.full_name,
                email: e.email,
                department: e.department,
                designation: e.designation,
                subjects: e.subjects,
                staff_room: e.staff_room,
                ..teacher
            })
        }
        (state, _) => state,
    }
}
