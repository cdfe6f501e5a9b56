// Write side shared by the command handlers.
//
// Responsibilities
// - Fold accepted events into the loaded state and save the resulting teacher.
// - Turn a rejection into an application error without touching the repository.

use crate::modules::timetable::core::evolve::evolve;
use crate::modules::timetable::core::state::TeacherState;
use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::use_cases::decision::Decision;
use crate::modules::timetable::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::teacher_repository::TeacherRepository;

pub async fn load_state<TRepository>(
    repository: &TRepository,
    teacher_id: &str,
) -> Result<TeacherState, ApplicationError>
where
    TRepository: TeacherRepository + ?Sized,
{
    Ok(repository.load(teacher_id).await?.into())
}

pub async fn commit<TRepository>(
    repository: &TRepository,
    state: TeacherState,
    decision: Decision,
) -> Result<Teacher, ApplicationError>
where
    TRepository: TeacherRepository + ?Sized,
{
    match decision {
        Decision::Accepted { events } => {
            let mut next = state;
            for event in events {
                tracing::debug!(event_type = event.event_type(), "applying event");
                next = evolve(next, event);
            }
            let teacher = next.into_teacher().ok_or_else(|| {
                ApplicationError::Unexpected("no teacher after accepted decision".into())
            })?;
            repository.save(teacher.clone()).await?;
            Ok(teacher)
        }
        Decision::Rejected { reason } => {
            tracing::warn!(%reason, "command rejected");
            Err(ApplicationError::Domain(reason))
        }
    }
}

#[cfg(test)]
mod commit_tests {
    use super::*;
    use crate::modules::timetable::core::events::TeacherEvent;
    use crate::modules::timetable::use_cases::decision::DecideError;
    use crate::shared::infrastructure::teacher_repository::in_memory::InMemoryTeacherRepository;
    use crate::test_support::fixtures::events::make_teacher_registered_v1_event;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_save_the_folded_teacher() {
        let repository = InMemoryTeacherRepository::new();
        let decision = Decision::Accepted {
            events: vec![TeacherEvent::TeacherRegisteredV1(
                make_teacher_registered_v1_event(),
            )],
        };
        let teacher = commit(&repository, TeacherState::None, decision)
            .await
            .expect("commit failed");
        let loaded = load_state(&repository, &teacher.teacher_id).await.unwrap();
        assert_eq!(loaded, TeacherState::Registered(teacher));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_not_write_a_rejected_decision() {
        let repository = InMemoryTeacherRepository::new();
        let decision = Decision::Rejected {
            reason: DecideError::UnknownTeacher("t-1".into()),
        };
        let result = commit(&repository, TeacherState::None, decision).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::UnknownTeacher(_)))
        ));
        assert!(repository.list().await.unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_nothing_was_registered() {
        let repository = InMemoryTeacherRepository::new();
        let decision = Decision::Accepted { events: vec![] };
        let result = commit(&repository, TeacherState::None, decision).await;
        assert!(matches!(result, Err(ApplicationError::Unexpected(_))));
    }
}
