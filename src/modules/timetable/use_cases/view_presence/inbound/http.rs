use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::timetable::core::time_slot::parse_clock_reading;
use crate::shell::http::{error_response, unprocessable};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DirectoryParams {
    pub q: Option<String>,
}

/// `at` is a clock reading such as `9:15 AM` or `14:05`, taken on today's date.
#[derive(Deserialize)]
pub struct PresenceParams {
    pub at: Option<String>,
}

pub async fn directory(
    State(state): State<AppState>,
    Query(params): Query<DirectoryParams>,
) -> impl IntoResponse {
    match state
        .presence_queries
        .directory(params.q.as_deref().unwrap_or_default())
        .await
    {
        Ok(views) => Json(views).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn presence(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
    Query(params): Query<PresenceParams>,
) -> impl IntoResponse {
    let time = match params.at.as_deref().map(parse_clock_reading).transpose() {
        Ok(time) => time,
        Err(error) => return unprocessable(error.to_string()),
    };
    match state.presence_queries.presence_at(&teacher_id, time).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn timetable(
    State(state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> impl IntoResponse {
    match state.presence_queries.timetable_of(&teacher_id).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod view_presence_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::test_support::fixtures::app_state::{make_offline_state, make_test_state};

    use super::{directory, presence, timetable};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/teachers", get(directory))
            .route("/teachers/{teacher_id}/presence", get(presence))
            .route("/teachers/{teacher_id}/timetable", get(timetable))
            .with_state(state)
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn it_should_report_the_class_in_session() {
        let (status, json) =
            get_json(make_test_state().await, "/teachers/t-fixed-0001/presence").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["full_name"], "Grace Hopper");
        assert_eq!(json["presence"]["effective"], "IN_CLASS");
        assert_eq!(json["presence"]["active_slot"], "9:00 AM - 10:00 AM");
        assert_eq!(json["presence"]["active_class"]["subject"], "Math");
    }

    #[tokio::test]
    async fn it_should_resolve_presence_at_a_given_reading() {
        let state = make_test_state().await;
        let (status, json) =
            get_json(state.clone(), "/teachers/t-fixed-0001/presence?at=9:45%20AM").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["presence"]["effective"], "AVAILABLE");
        assert!(json["presence"]["active_slot"].is_null());

        let (_, json) = get_json(state, "/teachers/t-fixed-0001/presence?at=09:05").await;
        assert_eq!(json["presence"]["effective"], "IN_CLASS");
    }

    #[tokio::test]
    async fn it_should_reject_an_unreadable_reading() {
        let (status, json) =
            get_json(make_test_state().await, "/teachers/t-fixed-0001/presence?at=noonish").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json["error"], "unreadable clock reading: noonish");
    }

    #[tokio::test]
    async fn it_should_filter_the_directory() {
        let state = make_test_state().await;
        let (status, json) = get_json(state.clone(), "/teachers?q=computer").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 1);

        let (_, json) = get_json(state, "/teachers?q=chemistry").await;
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_the_painted_timetable() {
        let (status, json) =
            get_json(make_test_state().await, "/teachers/t-fixed-0001/timetable").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["today"], "Monday");
        assert_eq!(json["classes_today"], 1);
        assert_eq!(json["rows"][0]["cells"][0]["state"], "current_class");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_teacher() {
        let (status, _) = get_json(make_test_state().await, "/teachers/t-missing/presence").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_repository_is_offline() {
        let (status, _) = get_json(make_offline_state(), "/teachers").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
