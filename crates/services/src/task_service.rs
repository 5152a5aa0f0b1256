use std::sync::Arc;

use olymp_core::model::Task;

use crate::api::CompetitionApi;
use crate::error::TasksError;

/// Loads the active question set. Fired once per page load; failures
/// leave the caller's list empty with no retry.
#[derive(Clone)]
pub struct TaskService {
    api: Arc<dyn CompetitionApi>,
}

impl TaskService {
    #[must_use]
    pub fn new(api: Arc<dyn CompetitionApi>) -> Self {
        Self { api }
    }

    /// Fetch tasks in display order.
    ///
    /// # Errors
    ///
    /// Returns `TasksError` if the request fails.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, TasksError> {
        match self.api.fetch_tasks().await {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch tasks");
                Err(err.into())
            }
        }
    }
}
