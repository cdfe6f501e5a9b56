// Pure decision function for signup.
//
// Responsibilities
// - Require a teacher id and a name.
// - If state is None, emit TeacherRegisteredV1. An existing teacher is rejected.

use crate::modules::timetable::core::events::TeacherEvent;
use crate::modules::timetable::core::events::v1::teacher_registered::TeacherRegisteredV1;
use crate::modules::timetable::core::state::TeacherState;
use crate::modules::timetable::use_cases::decision::{DecideError, Decision};
use crate::modules::timetable::use_cases::register_teacher::command::RegisterTeacher;

pub fn decide_register(state: &TeacherState, command: RegisterTeacher) -> Decision {
    if command.teacher_id.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingField("teacher_id"),
        };
    }
    if command.full_name.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingField("full_name"),
        };
    }

    match state {
        TeacherState::None => Decision::Accepted {
            events: vec![TeacherEvent::TeacherRegisteredV1(TeacherRegisteredV1 {
                teacher_id: command.teacher_id.trim().to_string(),
                full_name: command.full_name.trim().to_string(),
                email: command.email,
                department: command.department,
                designation: command.designation,
                subjects: command.subjects,
                staff_room: command.staff_room,
                registered_at: command.registered_at,
            })],
        },
        TeacherState::Registered(_) => Decision::Rejected {
            reason: DecideError::AlreadyExists,
        },
    }
}

#[cfg(test)]
mod register_teacher_decide_tests {
    use super::*;
    use crate::modules::timetable::core::evolve::evolve;
    use crate::test_support::fixtures::commands::RegisterTeacherBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn register_command() -> RegisterTeacher {
        RegisterTeacherBuilder::new().build()
    }

    #[rstest]
    fn it_should_decide_to_register_the_teacher(register_command: RegisterTeacher) {
        let decision = decide_register(&TeacherState::None, register_command.clone());
        assert_eq!(
            decision,
            Decision::Accepted {
                events: vec![TeacherEvent::TeacherRegisteredV1(TeacherRegisteredV1 {
                    teacher_id: register_command.teacher_id,
                    full_name: register_command.full_name,
                    email: register_command.email,
                    department: register_command.department,
                    designation: register_command.designation,
                    subjects: register_command.subjects,
                    staff_room: register_command.staff_room,
                    registered_at: register_command.registered_at,
                })]
            }
        );
    }

    #[rstest]
    fn it_should_decide_that_the_teacher_already_exists(register_command: RegisterTeacher) {
        let Decision::Accepted { events } =
            decide_register(&TeacherState::None, register_command.clone())
        else {
            panic!("expected the first registration to be accepted");
        };
        let registered = events.into_iter().fold(TeacherState::None, evolve);
        assert_eq!(
            decide_register(&registered, register_command),
            Decision::Rejected {
                reason: DecideError::AlreadyExists
            }
        );
    }

    #[rstest]
    #[case("", "Grace Hopper", "teacher_id")]
    #[case("t-1", "   ", "full_name")]
    fn it_should_require_an_id_and_a_name(
        #[case] teacher_id: &str,
        #[case] full_name: &str,
        #[case] field: &'static str,
    ) {
        let command = RegisterTeacherBuilder::new()
            .teacher_id(teacher_id)
            .full_name(full_name)
            .build();
        assert_eq!(
            decide_register(&TeacherState::None, command),
            Decision::Rejected {
                reason: DecideError::MissingField(field)
            }
        );
    }
}
