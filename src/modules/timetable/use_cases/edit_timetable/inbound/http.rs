use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::modules::timetable::core::schedule::RawSchedule;
use crate::shell::http::{error_response, rejection_response};
use crate::shell::state::AppState;

/// One editor cell. Leaving all three fields blank clears it.
#[derive(Deserialize)]
pub struct AssignSlotBody {
    pub day: String,
    pub slot: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub room: String,
}

pub async fn assign_slot(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    body: Result<Json<AssignSlotBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    let assignment = ClassAssignment::from_fields(&body.subject, &body.class, &body.room);
    match state
        .timetable_handler
        .assign_slot(&teacher_id, &body.day, &body.slot, assignment)
        .await
    {
        Ok(timetable) => Json(timetable).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn replace(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    body: Result<Json<RawSchedule>, JsonRejection>,
) -> impl IntoResponse {
    let Json(raw) = match body {
        Ok(b) => b,
        Err(rejection) => return rejection_response(rejection),
    };

    match state.timetable_handler.replace_timetable(&teacher_id, raw).await {
        Ok(timetable) => Json(timetable).into_response(),
        Err(error) => error_response(error),
    }
}
