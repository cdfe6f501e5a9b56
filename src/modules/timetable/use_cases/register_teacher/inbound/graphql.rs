use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::timetable::core::teacher::Teacher;
use crate::modules::timetable::use_cases::register_teacher::command::RegisterTeacher;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTeacher {
    pub teacher_id: String,
    pub full_name: String,
    pub email: Option<String>,
    pub department: String,
    pub designation: String,
    pub subjects: Vec<String>,
    pub staff_room: String,
    pub status: String,
}

impl From<Teacher> for GqlTeacher {
    fn from(t: Teacher) -> Self {
        Self {
            status: t.status.code().to_string(),
            teacher_id: t.teacher_id,
            full_name: t.full_name,
            email: t.email,
            department: t.department,
            designation: t.designation,
            subjects: t.subjects,
            staff_room: t.staff_room,
        }
    }
}

#[derive(Default)]
pub struct RegisterTeacherMutation;

#[Object]
impl RegisterTeacherMutation {
    #[allow(clippy::too_many_arguments)]
    async fn register_teacher(
        &self,
        context: &Context<'_>,
        teacher_id: String,
        full_name: String,
        email: Option<String>,
        department: Option<String>,
        designation: Option<String>,
        subjects: Option<Vec<String>>,
        staff_room: Option<String>,
    ) -> GqlResult<GqlTeacher> {
        let state = context.data_unchecked::<AppState>();

        let command = RegisterTeacher {
            teacher_id,
            full_name,
            email,
            department: department.unwrap_or_default(),
            designation: designation.unwrap_or_default(),
            subjects: subjects.unwrap_or_default(),
            staff_room: staff_room.unwrap_or_default(),
            registered_at: 0,
        };

        let teacher = state
            .register_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(teacher.into())
    }
}
