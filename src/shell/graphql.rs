use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::calendar::use_cases::list_holidays::inbound::graphql::HolidaysQuery;
use crate::modules::timetable::use_cases::edit_timetable::inbound::graphql::EditTimetableMutation;
use crate::modules::timetable::use_cases::register_teacher::inbound::graphql::RegisterTeacherMutation;
use crate::modules::timetable::use_cases::update_profile::inbound::graphql::UpdateProfileMutation;
use crate::modules::timetable::use_cases::update_status::inbound::graphql::UpdateStatusMutation;
use crate::modules::timetable::use_cases::view_presence::inbound::graphql::PresenceQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(PresenceQuery, HolidaysQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RegisterTeacherMutation,
    UpdateStatusMutation,
    UpdateProfileMutation,
    EditTimetableMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

#[cfg(test)]
mod app_schema_tests {
    use super::*;
    use crate::test_support::fixtures::app_state::{make_offline_state, make_test_state};

    async fn run(schema: &AppSchema, query: &str) -> serde_json::Value {
        let response = schema.execute(query).await;
        assert!(response.errors.is_empty(), "{:?}", response.errors);
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn it_should_resolve_presence_with_its_active_class() {
        let schema = build_schema(make_test_state().await);
        let data = run(
            &schema,
            r#"{
                presence(teacherId: "t-fixed-0001") {
                    effective manual activeSlot activeClass { subject room }
                }
            }"#,
        )
        .await;
        assert_eq!(
            data,
            serde_json::json!({
                "presence": {
                    "effective": "IN_CLASS",
                    "manual": "AVAILABLE",
                    "activeSlot": "9:00 AM - 10:00 AM",
                    "activeClass": { "subject": "Math", "room": "101" }
                }
            })
        );
    }

    #[tokio::test]
    async fn it_should_resolve_presence_at_a_given_reading() {
        let schema = build_schema(make_test_state().await);
        let data = run(
            &schema,
            r#"{ presence(teacherId: "t-fixed-0001", at: "2:05 PM") { effective activeSlot } }"#,
        )
        .await;
        assert_eq!(
            data["presence"],
            serde_json::json!({ "effective": "AVAILABLE", "activeSlot": "2:00 PM - 3:00 PM" })
        );

        let response = schema
            .execute(r#"{ presence(teacherId: "t-fixed-0001", at: "noonish") { effective } }"#)
            .await;
        assert_eq!(response.errors.len(), 1);
    }

    #[tokio::test]
    async fn it_should_apply_mutations_before_the_next_query() {
        let schema = build_schema(make_test_state().await);
        run(
            &schema,
            r#"mutation {
                registerTeacher(teacherId: "t-2", fullName: "Alan Turing", department: "Mathematics") {
                    status
                }
            }"#,
        )
        .await;
        run(
            &schema,
            r#"mutation { updateStatus(teacherId: "t-2", status: "On Holiday") }"#,
        )
        .await;
        let assigned = run(
            &schema,
            r#"mutation {
                assignSlot(teacherId: "t-2", day: "Monday", slot: "9:00 AM - 10:00 AM", subject: "Logic") {
                    classCount
                }
            }"#,
        )
        .await;
        assert_eq!(assigned["assignSlot"]["classCount"], 1);

        let data = run(
            &schema,
            r#"{ directory(query: "turing") { teacherId effective manual autoSuggestion } }"#,
        )
        .await;
        assert_eq!(
            data["directory"],
            serde_json::json!([{
                "teacherId": "t-2",
                "effective": "IN_CLASS",
                "manual": "ON_HOLIDAY",
                "autoSuggestion": "IN_CLASS"
            }])
        );
    }

    #[tokio::test]
    async fn it_should_edit_a_profile_without_touching_the_status() {
        let schema = build_schema(make_test_state().await);
        let data = run(
            &schema,
            r#"mutation {
                updateProfile(teacherId: "t-fixed-0001", fullName: "Grace Hopper", staffRoom: "Annex") {
                    staffRoom department status
                }
            }"#,
        )
        .await;
        assert_eq!(
            data["updateProfile"],
            serde_json::json!({ "staffRoom": "Annex", "department": "", "status": "AVAILABLE" })
        );
    }

    #[tokio::test]
    async fn it_should_list_upcoming_holidays() {
        let schema = build_schema(make_test_state().await);
        let data = run(
            &schema,
            r#"{ holidays(from: "2025-03-01", limit: 10) { name kind startsOn endsOn days } }"#,
        )
        .await;
        assert_eq!(
            data["holidays"],
            serde_json::json!([
                {
                    "name": "Holi",
                    "kind": "festival",
                    "startsOn": "2025-03-08",
                    "endsOn": "2025-03-08",
                    "days": 1
                },
                {
                    "name": "Spring Break",
                    "kind": "academic",
                    "startsOn": "2025-03-15",
                    "endsOn": "2025-03-25",
                    "days": 11
                }
            ])
        );
    }

    #[tokio::test]
    async fn it_should_surface_handler_failures_as_errors() {
        let schema = build_schema(make_test_state().await);
        let response = schema
            .execute(r#"mutation { updateStatus(teacherId: "t-fixed-0001", status: "BUSY") }"#)
            .await;
        assert_eq!(response.errors.len(), 1);

        let offline = build_schema(make_offline_state());
        let response = offline.execute(r#"{ directory { teacherId } }"#).await;
        assert_eq!(response.errors.len(), 1);
    }
}
