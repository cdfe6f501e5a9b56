use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateStatusMutation;

#[Object]
impl UpdateStatusMutation {
    /// Returns the committed status code.
    async fn update_status(
        &self,
        context: &Context<'_>,
        teacher_id: String,
        status: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let status = state
            .status_handler
            .update_status(&teacher_id, &status)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(status.code().to_string())
    }
}
