use async_graphql::{Context, Object, SimpleObject};
use chrono::NaiveDate;

use crate::modules::calendar::core::holiday::{Holiday, HolidayKind};
use crate::modules::calendar::use_cases::list_holidays::inbound::http::DEFAULT_LIMIT;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlHoliday {
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub days: i64,
}

impl From<&Holiday> for GqlHoliday {
    fn from(h: &Holiday) -> Self {
        let kind = match h.kind {
            HolidayKind::Public => "public",
            HolidayKind::Academic => "academic",
            HolidayKind::Festival => "festival",
        };
        Self {
            name: h.name.clone(),
            kind: kind.to_string(),
            description: h.description.clone(),
            starts_on: h.starts_on,
            ends_on: h.ends_on,
            days: h.days(),
        }
    }
}

#[derive(Default)]
pub struct HolidaysQuery;

#[Object]
impl HolidaysQuery {
    async fn holidays(
        &self,
        context: &Context<'_>,
        from: Option<NaiveDate>,
        limit: Option<i32>,
    ) -> Vec<GqlHoliday> {
        let state = context.data_unchecked::<AppState>();
        let from = from.unwrap_or_else(|| state.clock.now().date());
        let limit = limit.map_or(DEFAULT_LIMIT, |l| usize::try_from(l).unwrap_or(0));
        state
            .calendar
            .upcoming(from, limit)
            .into_iter()
            .map(Into::into)
            .collect()
    }

    async fn all_holidays(&self, context: &Context<'_>) -> Vec<GqlHoliday> {
        let state = context.data_unchecked::<AppState>();
        state.calendar.all().iter().map(Into::into).collect()
    }
}
