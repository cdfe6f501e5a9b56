use crate::modules::timetable::core::events::TeacherEvent;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("teacher already exists")]
    AlreadyExists,

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("unknown teacher: {0}")]
    UnknownTeacher(String),

    #[error("invalid status: {0:?}")]
    InvalidStatus(String),

    #[error("unknown day: {0:?}")]
    UnknownDay(String),

    #[error("unknown time slot: {0:?}")]
    UnknownSlot(String),

    #[error("{0}")]
    MalformedSchedule(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { events: Vec<TeacherEvent> },
    Rejected { reason: DecideError },
}
