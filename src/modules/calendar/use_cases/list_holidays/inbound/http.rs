use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::calendar::core::holiday::Holiday;
use crate::shell::state::AppState;

pub const DEFAULT_LIMIT: usize = 5;

#[derive(Deserialize)]
pub struct ListHolidaysParams {
    pub from: Option<NaiveDate>,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct ListHolidaysResponse {
    pub from: NaiveDate,
    pub holiday_today: Option<Holiday>,
    pub upcoming: Vec<Holiday>,
}

/// `from` defaults to today's date on the service clock.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListHolidaysParams>,
) -> impl IntoResponse {
    let from = params.from.unwrap_or_else(|| state.clock.now().date());
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    Json(ListHolidaysResponse {
        from,
        holiday_today: state.calendar.holiday_on(from).cloned(),
        upcoming: state
            .calendar
            .upcoming(from, limit)
            .into_iter()
            .cloned()
            .collect(),
    })
}

#[cfg(test)]
mod list_holidays_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::test_support::fixtures::app_state::make_test_state;

    use super::handle;

    async fn app() -> Router {
        Router::new()
            .route("/holidays", get(handle))
            .with_state(make_test_state().await)
    }

    #[tokio::test]
    async fn it_should_default_to_the_clock_date() {
        let response = app()
            .await
            .oneshot(Request::get("/holidays").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["from"], "2024-10-14");
        assert!(json["holiday_today"].is_null());
        let upcoming = json["upcoming"].as_array().unwrap();
        assert_eq!(upcoming.len(), 5);
        assert_eq!(upcoming[0]["name"], "Mid-Term Break");
        assert_eq!(upcoming[0]["kind"], "academic");
        assert_eq!(upcoming[0]["starts_on"], "2024-10-15");
    }

    #[tokio::test]
    async fn it_should_report_a_running_holiday() {
        let response = app()
            .await
            .oneshot(
                Request::get("/holidays?from=2024-12-25&limit=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["holiday_today"]["name"], "Winter Break");
        assert_eq!(json["upcoming"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_unreadable_date() {
        let response = app()
            .await
            .oneshot(
                Request::get("/holidays?from=tomorrow")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
