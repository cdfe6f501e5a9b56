use crate::modules::timetable::use_cases::decision::DecideError;
use crate::shared::infrastructure::teacher_repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("domain rejected: {0}")]
    Domain(DecideError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}
