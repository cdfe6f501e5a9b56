use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::timetable::core::time_slot::parse_clock_reading;
use crate::modules::timetable::use_cases::edit_timetable::inbound::graphql::GqlClassAssignment;
use crate::modules::timetable::use_cases::view_presence::projection::TeacherPresenceView;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlPresence {
    pub teacher_id: String,
    pub full_name: String,
    pub department: String,
    pub designation: String,
    pub staff_room: String,
    pub manual: String,
    pub effective: String,
    pub effective_label: String,
    pub auto_suggestion: Option<String>,
    pub overridable: bool,
    pub active_slot: Option<String>,
    pub active_class: Option<GqlClassAssignment>,
}

impl From<TeacherPresenceView> for GqlPresence {
    fn from(v: TeacherPresenceView) -> Self {
        let presence = v.presence;
        Self {
            teacher_id: v.teacher_id,
            full_name: v.full_name,
            department: v.department,
            designation: v.designation,
            staff_room: v.staff_room,
            manual: presence.manual.code().to_string(),
            effective: presence.effective.code().to_string(),
            effective_label: presence.effective.label().to_string(),
            auto_suggestion: presence.auto_suggestion.map(|s| s.code().to_string()),
            overridable: v.overridable,
            active_slot: presence.active_slot.map(|s| s.label().to_string()),
            active_class: presence.active_class.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct PresenceQuery;

#[Object]
impl PresenceQuery {
    async fn presence(
        &self,
        context: &Context<'_>,
        teacher_id: String,
        at: Option<String>,
    ) -> GqlResult<GqlPresence> {
        let state = context.data_unchecked::<AppState>();
        let time = at
            .as_deref()
            .map(parse_clock_reading)
            .transpose()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let view = state
            .presence_queries
            .presence_at(&teacher_id, time)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }

    async fn directory(
        &self,
        context: &Context<'_>,
        query: Option<String>,
    ) -> GqlResult<Vec<GqlPresence>> {
        let state = context.data_unchecked::<AppState>();
        let views = state
            .presence_queries
            .directory(query.as_deref().unwrap_or_default())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
