// Pure decision function for a profile edit.
//
// Responsibilities
// - Require a name. The teacher must exist.
// - Emit ProfileUpdatedV1 with trimmed fields. Status and timetable are not part of a profile.

use crate::modules::timetable::core::events::TeacherEvent;
use crate::modules::timetable::core::events::v1::profile_updated::ProfileUpdatedV1;
use crate::modules::timetable::core::state::TeacherState;
use crate::modules::timetable::use_cases::decision::{DecideError, Decision};
use crate::modules::timetable::use_cases::update_profile::command::UpdateProfile;

pub fn decide_update_profile(state: &TeacherState, command: UpdateProfile) -> Decision {
    if command.full_name.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingField("full_name"),
        };
    }

    match state {
        TeacherState::Registered(teacher) => Decision::Accepted {
            events: vec![TeacherEvent::ProfileUpdatedV1(ProfileUpdatedV1 {
                teacher_id: teacher.teacher_id.clone(),
                full_name: command.full_name.trim().to_string(),
                email: command
                    .email
                    .map(|email| email.trim().to_string())
                    .filter(|email| !email.is_empty()),
                department: command.department.trim().to_string(),
                designation: command.designation.trim().to_string(),
                subjects: command
                    .subjects
                    .into_iter()
                    .map(|subject| subject.trim().to_string())
                    .filter(|subject| !subject.is_empty())
                    .collect(),
                staff_room: command.staff_room.trim().to_string(),
                updated_at: command.updated_at,
            })],
        },
        TeacherState::None => Decision::Rejected {
            reason: DecideError::UnknownTeacher(command.teacher_id),
        },
    }
}

#[cfg(test)]
mod update_profile_decide_tests {
    use super::*;
    use crate::test_support::fixtures::teachers::TeacherBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn registered() -> TeacherState {
        TeacherState::Registered(TeacherBuilder::new().build())
    }

    #[fixture]
    fn command() -> UpdateProfile {
        UpdateProfile {
            teacher_id: "t-fixed-0001".into(),
            full_name: " Grace Brewster Hopper ".into(),
            email: Some("  ".into()),
            department: "Mathematics".into(),
            designation: "Rear Admiral".into(),
            subjects: vec!["COBOL".into(), " ".into()],
            staff_room: "Staff Room A".into(),
            updated_at: 1_700_000_000_000,
        }
    }

    #[rstest]
    fn it_should_decide_to_update_the_profile(registered: TeacherState, command: UpdateProfile) {
        assert_eq!(
            decide_update_profile(&registered, command),
            Decision::Accepted {
                events: vec![TeacherEvent::ProfileUpdatedV1(ProfileUpdatedV1 {
                    teacher_id: "t-fixed-0001".into(),
                    full_name: "Grace Brewster Hopper".into(),
                    email: None,
                    department: "Mathematics".into(),
                    designation: "Rear Admiral".into(),
                    subjects: vec!["COBOL".into()],
                    staff_room: "Staff Room A".into(),
                    updated_at: 1_700_000_000_000,
                })]
            }
        );
    }

    #[rstest]
    fn it_should_reject_a_blank_name(registered: TeacherState, command: UpdateProfile) {
        let command = UpdateProfile {
            full_name: "   ".into(),
            ..command
        };
        assert_eq!(
            decide_update_profile(&registered, command),
            Decision::Rejected {
                reason: DecideError::MissingField("full_name")
            }
        );
    }

    #[rstest]
    fn it_should_reject_an_unknown_teacher(command: UpdateProfile) {
        assert_eq!(
            decide_update_profile(&TeacherState::None, command),
            Decision::Rejected {
                reason: DecideError::UnknownTeacher("t-fixed-0001".into())
            }
        );
    }
}
