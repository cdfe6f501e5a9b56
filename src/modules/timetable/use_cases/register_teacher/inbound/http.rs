use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::timetable::use_cases::register_teacher::command::RegisterTeacher;
use crate::shell::http::{error_response, rejection_response};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RegisterTeacherBody {
    pub teacher_id: String,
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
    body: Result<Json<RegisterTeacherBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    let command = RegisterTeacher {
        teacher_id: body.teacher_id,
        full_name: body.full_name,
        email: body.email,
        department: body.department,
        designation: body.designation,
        subjects: body.subjects,
        staff_room: body.staff_room,
        registered_at: 0,
    };

    match state.register_handler.handle(command).await {
        Ok(teacher) => (StatusCode::CREATED, Json(teacher)).into_response(),
        Err(error) => error_response(error),
    }
}
