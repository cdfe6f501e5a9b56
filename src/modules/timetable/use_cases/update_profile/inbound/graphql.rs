use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::timetable::use_cases::register_teacher::inbound::graphql::GqlTeacher;
use crate::modules::timetable::use_cases::update_profile::command::UpdateProfile;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateProfileMutation;

#[Object]
impl UpdateProfileMutation {
    #[allow(clippy::too_many_arguments)]
    async fn update_profile(
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

        let command = UpdateProfile {
            teacher_id,
            full_name,
            email,
            department: department.unwrap_or_default(),
            designation: designation.unwrap_or_default(),
            subjects: subjects.unwrap_or_default(),
            staff_room: staff_room.unwrap_or_default(),
            updated_at: 0,
        };

        let teacher = state
            .profile_handler
            .update_profile(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(teacher.into())
    }
}
