// Pure decision function for a manual status change.
//
// Responsibilities
// - Accept only the five enumerated statuses; anything else is InvalidStatus.
// - The teacher must exist. Any prior status may be overwritten (last write wins).
// - The timetable is never touched.

use crate::modules::timetable::core::events::TeacherEvent;
use crate::modules::timetable::core::events::v1::status_updated::StatusUpdatedV1;
use crate::modules::timetable::core::state::TeacherState;
use crate::modules::timetable::core::status::TeacherStatus;
use crate::modules::timetable::use_cases::decision::{DecideError, Decision};
use crate::modules::timetable::use_cases::update_status::command::UpdateStatus;

pub fn decide_update_status(state: &TeacherState, command: UpdateStatus) -> Decision {
    let status: TeacherStatus = match command.status.parse() {
        Ok(status) => status,
        Err(_) => {
            return Decision::Rejected {
                reason: DecideError::InvalidStatus(command.status),
            };
        }
    };

    match state {
        TeacherState::Registered(teacher) => Decision::Accepted {
            events: vec![TeacherEvent::StatusUpdatedV1(StatusUpdatedV1 {
                teacher_id: teacher.teacher_id.clone(),
                previous: teacher.status,
                status,
                updated_at: command.updated_at,
            })],
        },
        TeacherState::None => Decision::Rejected {
            reason: DecideError::UnknownTeacher(command.teacher_id),
        },
    }
}
