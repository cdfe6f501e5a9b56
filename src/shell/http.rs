use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::calendar::use_cases::list_holidays::inbound::http as holidays_http;
use crate::modules::timetable::use_cases::decision::DecideError;
use crate::modules::timetable::use_cases::edit_timetable::inbound::http as edit_timetable_http;
use crate::modules::timetable::use_cases::errors::ApplicationError;
use crate::modules::timetable::use_cases::register_teacher::inbound::http as register_http;
use crate::modules::timetable::use_cases::update_profile::inbound::http as profile_http;
use crate::modules::timetable::use_cases::update_status::inbound::http as status_http;
use crate::modules::timetable::use_cases::view_presence::inbound::http as presence_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/teachers",
            post(register_http::handle).get(presence_http::directory),
        )
        .route("/teachers/{teacher_id}/presence", get(presence_http::presence))
        .route("/teachers/{teacher_id}/status", put(status_http::handle))
        .route("/teachers/{teacher_id}/profile", put(profile_http::handle))
        .route(
            "/teachers/{teacher_id}/timetable",
            get(presence_http::timetable).put(edit_timetable_http::replace),
        )
        .route(
            "/teachers/{teacher_id}/timetable/slot",
            put(edit_timetable_http::assign_slot),
        )
        .route("/holidays", get(holidays_http::handle))
        .with_state(state)
}

/// Maps a handler failure onto a status code with a `{"error": ..}` body.
pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Domain(DecideError::UnknownTeacher(_)) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(DecideError::AlreadyExists) => StatusCode::CONFLICT,
        ApplicationError::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Repository(_) | ApplicationError::Unexpected(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if status.is_server_error() {
        tracing::error!(error = %error, "request failed");
    } else {
        tracing::warn!(error = %error, "request rejected");
    }
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

/// An unreadable request body is a 422 carrying the extractor's message.
pub fn rejection_response(rejection: JsonRejection) -> Response {
    unprocessable(rejection.body_text())
}

pub fn unprocessable(message: impl Into<String>) -> Response {
    let message = message.into();
    tracing::warn!(error = %message, "request input rejected");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
        .into_response()
}
