// In memory implementation of the TeacherRepository port.
//
// Responsibilities
// - Store one record per teacher id.
// - Export and import the whole store as a JSON array for the host to persist.
// - Simulate an unavailable backend with `toggle_offline`.

use crate::modules::timetable::core::teacher::Teacher;
use crate::shared::infrastructure::teacher_repository::{RepositoryError, TeacherRepository};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryTeacherRepository {
    teachers: RwLock<HashMap<String, Teacher>>,
    is_offline: bool,
}

impl InMemoryTeacherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Teacher repository offline".into()));
        }
        Ok(())
    }

    /// Load teachers from a JSON array, replacing records with the same id.
    pub async fn import_snapshot(&self, json: &str) -> Result<usize, RepositoryError> {
        self.ensure_online()?;
        let teachers: Vec<Teacher> = serde_json::from_str(json)?;
        let count = teachers.len();
        let mut guard = self.teachers.write().await;
        for teacher in teachers {
            guard.insert(teacher.teacher_id.clone(), teacher);
        }
        Ok(count)
    }

    /// All teachers as a JSON array ordered by id.
    pub async fn export_snapshot(&self) -> Result<String, RepositoryError> {
        let teachers = self.list().await?;
        Ok(serde_json::to_string_pretty(&teachers)?)
    }
}

#[async_trait::async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn load(&self, teacher_id: &str) -> Result<Option<Teacher>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.teachers.read().await.get(teacher_id).cloned())
    }

    async fn save(&self, teacher: Teacher) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.teachers
            .write()
            .await
            .insert(teacher.teacher_id.clone(), teacher);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Teacher>, RepositoryError> {
        self.ensure_online()?;
        let mut teachers: Vec<Teacher> = self.teachers.read().await.values().cloned().collect();
        teachers.sort_by(|a, b| a.teacher_id.cmp(&b.teacher_id));
        Ok(teachers)
    }
}
