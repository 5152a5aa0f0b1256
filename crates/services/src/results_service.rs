use std::sync::Arc;

use olymp_core::model::{ParticipantId, Scoreboard, Task};

use crate::api::CompetitionApi;
use crate::error::ResultsError;

/// Builds the cabinet scoreboard from the results endpoint.
#[derive(Clone)]
pub struct ResultsService {
    api: Arc<dyn CompetitionApi>,
}

impl ResultsService {
    #[must_use]
    pub fn new(api: Arc<dyn CompetitionApi>) -> Self {
        Self { api }
    }

    /// Fetch the graded breakdown and pair it with the attainable
    /// maximum from the task list.
    ///
    /// # Errors
    ///
    /// Returns `ResultsError` if either fetch fails.
    pub async fn load_scoreboard(
        &self,
        participant_id: ParticipantId,
    ) -> Result<Scoreboard, ResultsError> {
        let summary = self.api.fetch_results(participant_id).await?;
        let tasks = self.api.fetch_tasks().await?;
        let max_points = tasks.iter().map(Task::points).sum();

        Ok(Scoreboard::new(
            summary.results,
            summary.total_points,
            max_points,
        ))
    }
}
