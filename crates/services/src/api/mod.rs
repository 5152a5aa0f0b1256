//! Client-side seam over the three remote competition endpoints.
//!
//! The endpoints are opaque collaborators: registration, the task set,
//! and grading/results all live server-side. `HttpCompetitionApi`
//! talks to the real service; `InMemoryCompetitionApi` mirrors its
//! semantics for tests and prototyping.

use async_trait::async_trait;

use olymp_core::model::{AnswerRecord, ParticipantId, RegistrationRequest, StoredParticipant, Task, TaskResult};

use crate::error::ApiError;

mod http;
mod mock;

pub use http::HttpCompetitionApi;
pub use mock::InMemoryCompetitionApi;

/// Successful registration: the identity the client retains plus the
/// server's human-readable message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub participant: StoredParticipant,
    pub message: Option<String>,
}

/// Server-computed grading summary. The client never re-derives these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradingSummary {
    pub correct_count: u32,
    pub total_tasks: u32,
    pub total_points: u32,
}

/// Per-question breakdown plus the server's point total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultsSummary {
    pub results: Vec<TaskResult>,
    pub total_points: u32,
}

#[async_trait]
pub trait CompetitionApi: Send + Sync {
    /// Register a participant.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` for application-level refusals
    /// (e.g. a duplicate email), other variants for transport trouble.
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, ApiError>;

    /// Fetch the active question set.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Submit answers for grading and return the server's summary.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or grading is refused.
    async fn submit_answers(
        &self,
        participant_id: ParticipantId,
        answers: &[AnswerRecord],
    ) -> Result<GradingSummary, ApiError>;

    /// Fetch the graded breakdown for a participant.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails.
    async fn fetch_results(
        &self,
        participant_id: ParticipantId,
    ) -> Result<ResultsSummary, ApiError>;
}
