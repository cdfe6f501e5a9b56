// AppState wired over the in-memory repository and a fixed clock, for inbound adapter tests.
// The clock reads Monday 2024-10-14 09:15; the fixture teacher teaches Math in that slot.

use crate::modules::calendar::core::academic_calendar::AcademicCalendar;
use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::schedule::Schedule;
use crate::modules::timetable::core::time_slot::TimeSlot;
use crate::modules::timetable::core::weekday::Weekday;
use crate::shared::core::clock::FixedClock;
use crate::shared::infrastructure::teacher_repository::TeacherRepository;
use crate::shared::infrastructure::teacher_repository::in_memory::InMemoryTeacherRepository;
use crate::shell::state::AppState;
use crate::test_support::fixtures::teachers::TeacherBuilder;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

pub const SEEDED_TEACHER_ID: &str = "t-fixed-0001";

pub fn monday_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 10, 14)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap()
}

fn state_over(repository: Arc<InMemoryTeacherRepository>) -> AppState {
    AppState::new(
        repository,
        Arc::new(FixedClock::new(monday_morning())),
        AcademicCalendar::builtin().unwrap(),
    )
}

pub async fn make_test_state() -> AppState {
    let repository = Arc::new(InMemoryTeacherRepository::new());
    let timetable = Schedule::empty().set_assignment(
        Weekday::Monday,
        TimeSlot::NineToTen,
        Some(ClassAssignment::new("Math", "10A", "101")),
    );
    repository
        .save(TeacherBuilder::new().timetable(Some(timetable)).build())
        .await
        .unwrap();
    state_over(repository)
}

pub fn make_offline_state() -> AppState {
    let mut repository = InMemoryTeacherRepository::new();
    repository.toggle_offline();
    state_over(Arc::new(repository))
}
