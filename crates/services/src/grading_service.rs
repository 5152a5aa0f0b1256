use std::sync::Arc;

use olymp_core::model::{AnswerSheet, ParticipantSession, Task};

use crate::api::{CompetitionApi, GradingSummary};
use crate::error::GradingError;

/// Posts the answer buffer for server-side grading.
#[derive(Clone)]
pub struct GradingService {
    api: Arc<dyn CompetitionApi>,
}

impl GradingService {
    #[must_use]
    pub fn new(api: Arc<dyn CompetitionApi>) -> Self {
        Self { api }
    }

    /// Submit the buffered answers for the current participant.
    ///
    /// The guard runs first: an anonymous session is rejected with
    /// `GradingError::RegistrationRequired` and no network call is
    /// made. Answers are sent trimmed, in task display order, with the
    /// zero elapsed-time placeholder; correctness and points come back
    /// from the server untouched.
    ///
    /// # Errors
    ///
    /// Returns `GradingError::RegistrationRequired` for an anonymous
    /// session, `GradingError::Api` if the request fails.
    pub async fn submit(
        &self,
        session: &ParticipantSession,
        sheet: &AnswerSheet,
        tasks: &[Task],
    ) -> Result<GradingSummary, GradingError> {
        let Some(participant_id) = session.participant_id() else {
            return Err(GradingError::RegistrationRequired);
        };

        let records = sheet.to_records(tasks);
        let summary = self.api.submit_answers(participant_id, &records).await?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use olymp_core::model::{ParticipantId, StoredParticipant, TaskId};

    use crate::api::InMemoryCompetitionApi;
    use crate::task_service::TaskService;

    #[tokio::test]
    async fn anonymous_submission_is_guarded() {
        let service = GradingService::new(Arc::new(InMemoryCompetitionApi::with_fixed_tasks()));
        let err = service
            .submit(&ParticipantSession::Anonymous, &AnswerSheet::new(), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GradingError::RegistrationRequired));
    }

    #[tokio::test]
    async fn registered_submission_returns_server_summary() {
        let api = Arc::new(InMemoryCompetitionApi::with_fixed_tasks());
        let tasks = TaskService::new(Arc::clone(&api) as Arc<dyn CompetitionApi>)
            .list_tasks()
            .await
            .unwrap();

        let session = ParticipantSession::registered(StoredParticipant::new(
            ParticipantId::new(1),
            "Иван Петров",
        ));
        let mut sheet = AnswerSheet::new();
        sheet.set(TaskId::new(1), " 8 ");
        sheet.set(TaskId::new(2), "26");

        let service = GradingService::new(api);
        let summary = service.submit(&session, &sheet, &tasks).await.unwrap();
        assert_eq!(summary.correct_count, 2);
        assert_eq!(summary.total_tasks, 2);
        assert_eq!(summary.total_points, 10);
    }
}
