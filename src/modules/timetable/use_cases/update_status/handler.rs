// The only path that persists a manual status change.
//
// Responsibilities
// - Load the teacher, decide, fold the StatusUpdated event and save the record.
// - Presence is resolved per read, so the next resolve sees the new status.

use crate::modules::timetable::core::status::TeacherStatus;
use crate::modules::timetable::use_cases::commit::{commit, load_state};
use crate::modules::timetable::use_cases::errors::ApplicationError;
use crate::modules::timetable::use_cases::update_status::command::UpdateStatus;
use crate::modules::timetable::use_cases::update_status::decide::decide_update_status;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::teacher_repository::TeacherRepository;
use std::sync::Arc;

pub struct UpdateStatusHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> UpdateStatusHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn update_status(
        &self,
        teacher_id: &str,
        new_status: &str,
    ) -> Result<TeacherStatus, ApplicationError> {
        self.handle(UpdateStatus {
            teacher_id: teacher_id.to_string(),
            status: new_status.to_string(),
            updated_at: self.clock.now_millis(),
        })
        .await
    }

    pub async fn handle(&self, command: UpdateStatus) -> Result<TeacherStatus, ApplicationError> {
        let state = load_state(&*self.repository, &command.teacher_id).await?;
        let decision = decide_update_status(&state, command);
        let teacher = commit(&*self.repository, state, decision).await?;
        tracing::info!(
            teacher_id = %teacher.teacher_id,
            status = teacher.status.code(),
            "status updated"
        );
        Ok(teacher.status)
    }
}
