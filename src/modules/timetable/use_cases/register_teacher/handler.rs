use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::use_cases::commit::{commit, load_state};
use crate::modules::timetable::use_cases::errors::ApplicationError;
use crate::modules::timetable::use_cases::register_teacher::command::RegisterTeacher;
use crate::modules::timetable::use_cases::register_teacher::decide::decide_register;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::teacher_repository::TeacherRepository;
use std::sync::Arc;

pub struct RegisterTeacherHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> RegisterTeacherHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Creates the teacher with an empty timetable and the Available status.
    pub async fn handle(&self, mut command: RegisterTeacher) -> Result<Teacher, ApplicationError> {
        command.registered_at = self.clock.now_millis();
        let state = load_state(&*self.repository, command.teacher_id.trim()).await?;
        let decision = decide_register(&state, command);
        let teacher = commit(&*self.repository, state, decision).await?;
        tracing::info!(teacher_id = %teacher.teacher_id, "teacher registered");
        Ok(teacher)
    }
}

#[cfg(test)]
mod register_teacher_handler_tests {
    use super::*;
    use crate::modules::timetable::core::schedule::Schedule;
    use crate::modules::timetable::core::status::TeacherStatus;
    use crate::modules::timetable::use_cases::decision::DecideError;
    use crate::shared::core::clock::FixedClock;
    use crate::shared::infrastructure::teacher_repository::RepositoryError;
    use crate::shared::infrastructure::teacher_repository::in_memory::InMemoryTeacherRepository;
    use crate::test_support::fixtures::commands::RegisterTeacherBuilder;
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (RegisterTeacher, InMemoryTeacherRepository, Arc<dyn Clock>);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let now = NaiveDate::from_ymd_opt(2024, 10, 14)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        (
            RegisterTeacherBuilder::new().build(),
            InMemoryTeacherRepository::new(),
            Arc::new(FixedClock::new(now)),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_saves_an_available_teacher_with_an_empty_grid(
        before_each: BeforeEachReturn,
    ) {
        let (command, repository, clock) = before_each;
        let repository = Arc::new(repository);
        let handler = RegisterTeacherHandler::new(repository.clone(), clock);
        let teacher = handler.handle(command.clone()).await.expect("handle failed");

        assert_eq!(teacher.status, TeacherStatus::Available);
        assert_eq!(teacher.timetable, Some(Schedule::empty()));
        assert_eq!(
            repository.load(&command.teacher_id).await.unwrap(),
            Some(teacher)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_fails_if_teacher_exists(before_each: BeforeEachReturn) {
        let (command, repository, clock) = before_each;
        let handler = RegisterTeacherHandler::new(Arc::new(repository), clock);
        handler
            .handle(command.clone())
            .await
            .expect("first handle failed");
        let result = handler.handle(command).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DecideError::AlreadyExists))
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn handle_register_fails_if_repository_is_offline(before_each: BeforeEachReturn) {
        let (command, mut repository, clock) = before_each;
        repository.toggle_offline();
        let handler = RegisterTeacherHandler::new(Arc::new(repository), clock);
        let result = handler.handle(command).await;
        assert!(matches!(
            result,
            Err(ApplicationError::Repository(RepositoryError::Backend(_)))
        ));
    }
}
