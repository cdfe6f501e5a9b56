use crate::modules::timetable::core::teacher::Teacher;

/// Domain state of one teacher, as loaded from the repository and advanced by `evolve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeacherState {
    None,
    Registered(Teacher),
}

impl From<Option<Teacher>> for TeacherState {
    fn from(teacher: Option<Teacher>) -> Self {
        match teacher {
            Some(teacher) => TeacherState::Registered(teacher),
            None => TeacherState::None,
        }
    }
}

impl TeacherState {
    pub fn teacher(&self) -> Option<&Teacher> {
        match self {
            TeacherState::Registered(teacher) => Some(teacher),
            TeacherState::None => None,
        }
    }

    pub fn into_teacher(self) -> Option<Teacher> {
        match self {
            TeacherState::Registered(teacher) => Some(teacher),
            TeacherState::None => None,
        }
    }
}
