// Teacher repository port.
//
// Purpose
// - Describe what the handlers need from storage: load one teacher, save one teacher, list all.
//
// Boundaries
// - No concrete storage here. The in-memory adapter backs tests, local development and the
//   binary; the host decides when to export or import a snapshot.

pub mod in_memory;

use crate::modules::timetable::core::teacher::Teacher;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

#[async_trait]
pub trait TeacherRepository: Send + Sync {
    async fn load(&self, teacher_id: &str) -> Result<Option<Teacher>, RepositoryError>;
    /// Replace-whole-value write; the last save wins.
    async fn save(&self, teacher: Teacher) -> Result<(), RepositoryError>;
    async fn list(&self) -> Result<Vec<Teacher>, RepositoryError>;
}
