// Shared test fixtures for commands, seeded from json/teacher.json.

use crate::modules::timetable::use_cases::register_teacher::command::RegisterTeacher;
use crate::test_support::fixtures::teachers::load_teacher_dto;

pub struct RegisterTeacherBuilder {
    inner: RegisterTeacher,
}

impl Default for RegisterTeacherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterTeacherBuilder {
    pub fn new() -> Self {
        let dto = load_teacher_dto();
        Self {
            inner: RegisterTeacher {
                teacher_id: dto.teacher_id,
                full_name: dto.full_name,
                email: dto.email,
                department: dto.department,
                designation: dto.designation,
                subjects: dto.subjects,
                staff_room: dto.staff_room,
                registered_at: 1_700_000_000_000,
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

    pub fn build(self) -> RegisterTeacher {
        self.inner
    }
}
