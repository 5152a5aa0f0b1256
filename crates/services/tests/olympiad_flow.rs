use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use olymp_core::model::{
    AnswerRecord, AnswerSheet, ParticipantId, ParticipantSession, RegistrationForm,
    RegistrationRequest, Task, TaskId,
};
use olymp_core::time::fixed_clock;
use services::api::{
    CompetitionApi, GradingSummary, InMemoryCompetitionApi, RegistrationOutcome, ResultsSummary,
};
use services::{
    ApiError, AppServices, GradingError,
};
use storage::repository::Storage;

fn filled_form() -> RegistrationForm {
    RegistrationForm {
        student_name: "Иван Петров".to_string(),
        school: "Школа №1, 3-А класс".to_string(),
        parent_name: "Петров Александр Иванович".to_string(),
        email: "example@mail.ru".to_string(),
        phone: "+7 (999) 123-45-67".to_string(),
    }
}

#[tokio::test]
async fn full_flow_register_submit_and_read_cabinet() {
    let api: Arc<dyn CompetitionApi> =
        Arc::new(InMemoryCompetitionApi::with_fixed_tasks().with_next_participant_id(42));
    let storage = Storage::in_memory();
    let services = AppServices::assemble(api, &storage, fixed_clock());

    // Register and receive the server-issued identity.
    let outcome = services
        .registration_service()
        .register(&filled_form())
        .await
        .expect("register");
    assert_eq!(outcome.participant.id(), ParticipantId::new(42));

    // The identity survives a simulated reload.
    let session = services.session_service().load().await.expect("load");
    assert_eq!(session.participant_id(), Some(ParticipantId::new(42)));

    // The question set holds five tasks.
    let tasks = services.task_service().list_tasks().await.expect("tasks");
    assert_eq!(tasks.len(), 5);

    // Answer everything per the key and submit.
    let mut sheet = AnswerSheet::new();
    for (task_id, answer) in [(1, "8"), (2, "26"), (3, "72"), (4, "6"), (5, "5")] {
        sheet.set(TaskId::new(task_id), answer);
    }
    let summary = services
        .grading_service()
        .submit(&session, &sheet, &tasks)
        .await
        .expect("submit");
    assert_eq!(summary.correct_count, 5);
    assert_eq!(summary.total_tasks, 5);
    assert_eq!(summary.total_points, 45);

    // The cabinet shows 45 of 45 and 100%.
    let board = services
        .results_service()
        .load_scoreboard(ParticipantId::new(42))
        .await
        .expect("scoreboard");
    assert_eq!(board.total_points(), 45);
    assert_eq!(board.max_points(), 45);
    assert_eq!(board.percent(), 100);
    assert_eq!(board.correct_count(), 5);
}

#[tokio::test]
async fn logout_clears_the_stored_identity() {
    let api: Arc<dyn CompetitionApi> = Arc::new(InMemoryCompetitionApi::with_fixed_tasks());
    let storage = Storage::in_memory();
    let services = AppServices::assemble(api, &storage, fixed_clock());

    services
        .registration_service()
        .register(&filled_form())
        .await
        .expect("register");
    services.session_service().clear().await.expect("clear");

    let session = services.session_service().load().await.expect("load");
    assert_eq!(session, ParticipantSession::Anonymous);
}

/// Wrapper that counts calls to prove the anonymous guard makes none.
struct CountingApi {
    inner: InMemoryCompetitionApi,
    calls: AtomicUsize,
}

impl CountingApi {
    fn new() -> Self {
        Self {
            inner: InMemoryCompetitionApi::with_fixed_tasks(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CompetitionApi for CountingApi {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.register(request).await
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_tasks().await
    }

    async fn submit_answers(
        &self,
        participant_id: ParticipantId,
        answers: &[AnswerRecord],
    ) -> Result<GradingSummary, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.submit_answers(participant_id, answers).await
    }

    async fn fetch_results(
        &self,
        participant_id: ParticipantId,
    ) -> Result<ResultsSummary, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch_results(participant_id).await
    }
}

#[tokio::test]
async fn anonymous_submission_makes_zero_network_calls() {
    let api = Arc::new(CountingApi::new());
    let storage = Storage::in_memory();
    let services = AppServices::assemble(
        Arc::clone(&api) as Arc<dyn CompetitionApi>,
        &storage,
        fixed_clock(),
    );

    let mut sheet = AnswerSheet::new();
    sheet.set(TaskId::new(1), "8");

    let err = services
        .grading_service()
        .submit(&ParticipantSession::Anonymous, &sheet, &[])
        .await
        .unwrap_err();

    assert!(matches!(err, GradingError::RegistrationRequired));
    assert_eq!(api.calls.load(Ordering::SeqCst), 0);
}
