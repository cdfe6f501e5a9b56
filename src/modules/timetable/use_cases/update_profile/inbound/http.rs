use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::timetable::use_cases::update_profile::command::UpdateProfile;
use crate::shell::http::{error_response, rejection_response};
use crate::shell::state::AppState;

/// Omitted fields are cleared, except `full_name` which is required.
#[derive(Deserialize)]
pub struct UpdateProfileBody {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub staff_room: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    body: Result<Json<UpdateProfileBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    let command = UpdateProfile {
        teacher_id,
        full_name: body.full_name,
        email: body.email,
        department: body.department,
        designation: body.designation,
        subjects: body.subjects,
        staff_room: body.staff_room,
        updated_at: 0,
    };

    match state.profile_handler.update_profile(command).await {
        Ok(teacher) => Json(teacher).into_response(),
        Err(error) => error_response(error),
    }
}
