use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::timetable::core::assignment::ClassAssignment;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlClassAssignment {
    pub subject: String,
    pub class: String,
    pub room: String,
}

impl From<ClassAssignment> for GqlClassAssignment {
    fn from(a: ClassAssignment) -> Self {
        Self {
            subject: a.subject,
            class: a.class,
            room: a.room,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlSlotAssigned {
    pub teacher_id: String,
    pub day: String,
    pub slot: String,
    pub assignment: Option<GqlClassAssignment>,
    pub class_count: i32,
}

#[derive(Default)]
pub struct EditTimetableMutation;

#[Object]
impl EditTimetableMutation {
    /// Blank or missing subject, class and room clear the cell.
    #[allow(clippy::too_many_arguments)]
    async fn assign_slot(
        &self,
        context: &Context<'_>,
        teacher_id: String,
        day: String,
        slot: String,
        subject: Option<String>,
        class: Option<String>,
        room: Option<String>,
    ) -> GqlResult<GqlSlotAssigned> {
        let state = context.data_unchecked::<AppState>();
        let assignment = ClassAssignment::from_fields(
            subject.as_deref().unwrap_or_default(),
            class.as_deref().unwrap_or_default(),
            room.as_deref().unwrap_or_default(),
        );

        let timetable = state
            .timetable_handler
            .assign_slot(&teacher_id, &day, &slot, assignment.clone())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(GqlSlotAssigned {
            teacher_id,
            day,
            slot,
            assignment: assignment.map(Into::into),
            class_count: i32::try_from(timetable.class_count()).unwrap_or(i32::MAX),
        })
    }
}
