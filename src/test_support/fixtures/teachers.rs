// Shared test fixture for teacher records.
// The canonical teacher is read from json/teacher.json; setters override single fields.

use crate::modules::timetable::core::schedule::Schedule;
use crate::modules::timetable::core::status::TeacherStatus;
use crate::modules::timetable::core::teacher::Teacher;
use serde::Deserialize;
use std::fs;

pub const TEACHER_JSON: &str = "./src/test_support/fixtures/json/teacher.json";

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct TeacherDto {
    pub teacher_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub department: String,
    pub designation: String,
    pub subjects: Vec<String>,
    pub staff_room: String,
}

pub fn load_teacher_dto() -> TeacherDto {
    let json_str = fs::read_to_string(TEACHER_JSON).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub struct TeacherBuilder {
    inner: Teacher,
}

impl Default for TeacherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TeacherBuilder {
    pub fn new() -> Self {
        let dto = load_teacher_dto();
        Self {
            inner: Teacher {
                teacher_id: dto.teacher_id,
                full_name: dto.full_name,
                email: dto.email,
                department: dto.department,
                designation: dto.designation,
                subjects: dto.subjects,
                staff_room: dto.staff_room,
                status: TeacherStatus::Available,
                timetable: Some(Schedule::empty()),
            },
        }
    }

    pub fn teacher_id(mut self, v: impl Into<String>) -> Self {
        self.inner.teacher_id = v.into();
        self
    }

    pub fn full_name(mut self, v: impl Into<String>) -> Self {
        self.inner.full_name = v.into();
        self
    }

    pub fn department(mut self, v: impl Into<String>) -> Self {
        self.inner.department = v.into();
        self
    }

    pub fn status(mut self, v: TeacherStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn timetable(mut self, v: Option<Schedule>) -> Self {
        self.inner.timetable = v;
        self
    }

    pub fn build(self) -> Teacher {
        self.inner
    }
}
