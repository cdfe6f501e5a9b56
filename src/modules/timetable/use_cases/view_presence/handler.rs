// Presence queries.
//
// Responsibilities
// - Resolve presence against the injected clock at read time; nothing is cached or persisted.

use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::use_cases::decision::DecideError;
use crate::modules::timetable::use_cases::errors::ApplicationError;
use crate::modules::timetable::use_cases::view_presence::projection::{
    TeacherPresenceView, TimetableView,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::teacher_repository::TeacherRepository;
use chrono::NaiveTime;
use std::sync::Arc;

pub struct PresenceQueryHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

impl<TRepository> PresenceQueryHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    async fn teacher(&self, teacher_id: &str) -> Result<Teacher, ApplicationError> {
        self.repository.load(teacher_id).await?.ok_or_else(|| {
            ApplicationError::Domain(DecideError::UnknownTeacher(teacher_id.into()))
        })
    }

    /// Presence at `time` on today's date, or now when `time` is `None`.
    pub async fn presence_at(
        &self,
        teacher_id: &str,
        time: Option<NaiveTime>,
    ) -> Result<TeacherPresenceView, ApplicationError> {
        let teacher = self.teacher(teacher_id).await?;
        let now = self.clock.now();
        let at = time.map_or(now, |time| now.date().and_time(time));
        Ok(TeacherPresenceView::at(at, &teacher))
    }

    pub async fn timetable_of(&self, teacher_id: &str) -> Result<TimetableView, ApplicationError> {
        let teacher = self.teacher(teacher_id).await?;
        Ok(TimetableView::at(self.clock.now(), &teacher))
    }

    /// Teachers matching `query`, ordered by name, each with its presence at the same instant.
    pub async fn directory(
        &self,
        query: &str,
    ) -> Result<Vec<TeacherPresenceView>, ApplicationError> {
        let now = self.clock.now();
        let mut views: Vec<TeacherPresenceView> = self
            .repository
            .list()
            .await?
            .iter()
            .filter(|teacher| teacher.matches(query))
            .map(|teacher| TeacherPresenceView::at(now, teacher))
            .collect();
        views.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        Ok(views)
    }
}
