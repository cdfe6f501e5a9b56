use crate::modules::calendar::core::academic_calendar::AcademicCalendar;
use crate::modules::timetable::use_cases::edit_timetable::handler::EditTimetableHandler;
use crate::modules::timetable::use_cases::register_teacher::handler::RegisterTeacherHandler;
use crate::modules::timetable::use_cases::update_profile::handler::UpdateProfileHandler;
use crate::modules::timetable::use_cases::update_status::handler::UpdateStatusHandler;
use crate::modules::timetable::use_cases::view_presence::handler::PresenceQueryHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::teacher_repository::in_memory::InMemoryTeacherRepository;
use std::sync::Arc;

type Repository = InMemoryTeacherRepository;

#[derive(Clone)]
pub struct AppState {
    pub register_handler: Arc<RegisterTeacherHandler<Repository>>,
    pub status_handler: Arc<UpdateStatusHandler<Repository>>,
    pub profile_handler: Arc<UpdateProfileHandler<Repository>>,
    pub timetable_handler: Arc<EditTimetableHandler<Repository>>,
    pub presence_queries: Arc<PresenceQueryHandler<Repository>>,
    pub calendar: Arc<AcademicCalendar>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(
        repository: Arc<Repository>,
        clock: Arc<dyn Clock>,
        calendar: AcademicCalendar,
    ) -> Self {
        Self {
            register_handler: Arc::new(RegisterTeacherHandler::new(
                repository.clone(),
                clock.clone(),
            )),
            status_handler: Arc::new(UpdateStatusHandler::new(repository.clone(), clock.clone())),
            profile_handler: Arc::new(UpdateProfileHandler::new(
                repository.clone(),
                clock.clone(),
            )),
            timetable_handler: Arc::new(EditTimetableHandler::new(
                repository.clone(),
                clock.clone(),
            )),
            presence_queries: Arc::new(PresenceQueryHandler::new(repository, clock.clone())),
            calendar: Arc::new(calendar),
            clock,
        }
    }
}
