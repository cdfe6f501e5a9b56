// Persists a profile edit.
//
// Responsibilities
// - Load the teacher, decide, fold the ProfileUpdated event and save the record.

use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::use_cases::commit::{commit, load_state};
use crate::modules::timetable::use_cases::errors::ApplicationError;
use crate::modules::timetable::use_cases::update_profile::command::UpdateProfile;
use crate::modules::timetable::use_cases::update_profile::decide::decide_update_profile;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::teacher_repository::TeacherRepository;
use std::sync::Arc;

pub struct UpdateProfileHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> UpdateProfileHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Stamps the command with the clock before handling it.
    pub async fn update_profile(
        &self,
        command: UpdateProfile,
    ) -> Result<Teacher, ApplicationError> {
        self.handle(UpdateProfile {
            updated_at: self.clock.now_millis(),
            ..command
        })
        .await
    }

    pub async fn handle(&self, command: UpdateProfile) -> Result<Teacher, ApplicationError> {
        let state = load_state(&*self.repository, &command.teacher_id).await?;
        let decision = decide_update_profile(&state, command);
        let teacher = commit(&*self.repository, state, decision).await?;
        tracing::info!(teacher_id = %teacher.teacher_id, "profile updated");
        Ok(teacher)
    }
}
