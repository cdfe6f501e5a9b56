use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::timetable::core::status::TeacherStatus;
use crate::shell::http::{error_response, rejection_response};
use crate::shell::state::AppState;

/// `status` takes the code ("ON_BREAK") or the label ("On a Break").
#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub status: String,
}

#[derive(Serialize)]
pub struct UpdateStatusResponse {
    pub teacher_id: String,
    pub status: TeacherStatus,
    pub label: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    body: Result<Json<UpdateStatusBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    match state
        .status_handler
        .update_status(&teacher_id, &body.status)
        .await
    {
        Ok(status) => Json(UpdateStatusResponse {
            teacher_id,
            status,
            label: status.label(),
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}
