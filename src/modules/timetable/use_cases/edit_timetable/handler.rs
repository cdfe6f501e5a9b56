use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::schedule::{RawSchedule, Schedule};
use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::use_cases::commit::{commit, load_state};
use crate::modules::timetable::use_cases::edit_timetable::command::{AssignSlot, ReplaceTimetable};
use crate::modules::timetable::use_cases::edit_timetable::decide::{
    decide_assign_slot, decide_replace_timetable,
};
use crate::modules::timetable::use_cases::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::teacher_repository::TeacherRepository;
use std::sync::Arc;

pub struct EditTimetableHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    repository: Arc<TRepository>,
    clock: Arc<dyn Clock>,
}

fn timetable_of(teacher: Teacher) -> Schedule {
    teacher.timetable.unwrap_or_default()
}

impl<TRepository> EditTimetableHandler<TRepository>
where
    TRepository: TeacherRepository + 'static,
{
    pub fn new(repository: Arc<TRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Write one cell; `None` clears it. Returns the teacher's updated timetable.
    pub async fn assign_slot(
        &self,
        teacher_id: &str,
        day: &str,
        slot: &str,
        assignment: Option<ClassAssignment>,
    ) -> Result<Schedule, ApplicationError> {
        let command = AssignSlot {
            teacher_id: teacher_id.to_string(),
            day: day.to_string(),
            slot: slot.to_string(),
            assignment,
            assigned_at: self.clock.now_millis(),
        };
        let state = load_state(&*self.repository, teacher_id).await?;
        let decision = decide_assign_slot(&state, command);
        let teacher = commit(&*self.repository, state, decision).await?;
        tracing::info!(teacher_id = %teacher.teacher_id, day, slot, "timetable cell written");
        Ok(timetable_of(teacher))
    }

    /// Replace the whole timetable with an uploaded one.
    pub async fn replace_timetable(
        &self,
        teacher_id: &str,
        timetable: RawSchedule,
    ) -> Result<Schedule, ApplicationError> {
        let command = ReplaceTimetable {
            teacher_id: teacher_id.to_string(),
            timetable,
            replaced_at: self.clock.now_millis(),
        };
        let state = load_state(&*self.repository, teacher_id).await?;
        let decision = decide_replace_timetable(&state, command);
        let teacher = commit(&*self.repository, state, decision).await?;
        let timetable = timetable_of(teacher);
        tracing::info!(
            teacher_id,
            classes = timetable.class_count(),
            "timetable replaced"
        );
        Ok(timetable)
    }
}
