use std::sync::Arc;

use olymp_core::model::{
    AnswerRecord, ParticipantId, ParticipantSession, RegistrationRequest, StoredParticipant, Task,
    TaskId,
};
use services::api::{
    CompetitionApi, GradingSummary, InMemoryCompetitionApi, RegistrationOutcome, ResultsSummary,
};
use services::ApiError;

use super::test_harness::{ViewKind, setup_view_harness};

fn fixed_api() -> Arc<InMemoryCompetitionApi> {
    Arc::new(InMemoryCompetitionApi::with_fixed_tasks())
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_marketing_copy() {
    let mut harness = setup_view_harness(ViewKind::Home, ParticipantSession::Anonymous, fixed_api());
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Математическая Олимпиада 2025"),
        "missing hero title in {html}"
    );
    assert!(html.contains("299 ₽"), "missing price in {html}");
    assert!(
        html.contains("Участвовать в олимпиаде"),
        "missing call to action in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn tasks_view_smoke_renders_question_set() {
    let mut harness =
        setup_view_harness(ViewKind::Tasks, ParticipantSession::Anonymous, fixed_api());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Сколько будет 9 × 8?"),
        "missing question in {html}"
    );
    assert!(html.contains("15 баллов"), "missing points badge in {html}");
    assert!(
        html.contains("Проверить ответы"),
        "missing submit control in {html}"
    );
}

struct FailingApi;

#[async_trait::async_trait]
impl CompetitionApi for FailingApi {
    async fn register(
        &self,
        _request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, ApiError> {
        Err(ApiError::Rejected {
            message: "fail".to_string(),
        })
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        Err(ApiError::Rejected {
            message: "fail".to_string(),
        })
    }

    async fn submit_answers(
        &self,
        _participant_id: ParticipantId,
        _answers: &[AnswerRecord],
    ) -> Result<GradingSummary, ApiError> {
        Err(ApiError::Rejected {
            message: "fail".to_string(),
        })
    }

    async fn fetch_results(
        &self,
        _participant_id: ParticipantId,
    ) -> Result<ResultsSummary, ApiError> {
        Err(ApiError::Rejected {
            message: "fail".to_string(),
        })
    }
}

#[tokio::test(flavor = "current_thread")]
async fn tasks_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(
        ViewKind::Tasks,
        ParticipantSession::Anonymous,
        Arc::new(FailingApi),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Не удалось загрузить данные"),
        "missing error notice in {html}"
    );
    assert!(html.contains("Повторить"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_view_smoke_renders_required_fields() {
    let mut harness = setup_view_harness(
        ViewKind::Register,
        ParticipantSession::Anonymous,
        fixed_api(),
    );
    harness.rebuild();
    let html = harness.render();
    for label in [
        "Имя и Фамилия ученика",
        "Школа и класс",
        "ФИО родителя",
        "Email для связи",
        "Телефон",
    ] {
        assert!(html.contains(label), "missing field {label} in {html}");
    }
    assert!(
        html.contains("Зарегистрироваться и получить ссылку на оплату"),
        "missing submit control in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn cabinet_view_smoke_prompts_anonymous_visitors() {
    let mut harness = setup_view_harness(
        ViewKind::Cabinet,
        ParticipantSession::Anonymous,
        fixed_api(),
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Кабинет доступен после регистрации."),
        "missing registration prompt in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn cabinet_view_smoke_renders_full_score() {
    let api = fixed_api();
    let participant_id = ParticipantId::new(42);
    let answers: Vec<AnswerRecord> = [(1, "8"), (2, "26"), (3, "72"), (4, "6"), (5, "5")]
        .into_iter()
        .map(|(task_id, answer)| AnswerRecord {
            task_id: TaskId::new(task_id),
            answer: answer.to_string(),
            time_spent_seconds: 0,
        })
        .collect();
    api.submit_answers(participant_id, &answers)
        .await
        .expect("grade answers");

    let session = ParticipantSession::registered(StoredParticipant::new(
        participant_id,
        "Иван Петров",
    ));
    let mut harness = setup_view_harness(ViewKind::Cabinet, session, api);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("45 / 45"), "missing score in {html}");
    assert!(html.contains("100%"), "missing percent in {html}");
    assert!(html.contains("Верно"), "missing row status in {html}");
    assert!(html.contains("Иван Петров"), "missing name in {html}");
    assert!(html.contains("Выйти"), "missing logout control in {html}");
}
