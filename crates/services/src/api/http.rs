use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use olymp_core::model::{
    AnswerRecord, ParticipantId, RegistrationRequest, StoredParticipant, Task, TaskId, TaskResult,
    sort_by_display_order,
};

use crate::api::{CompetitionApi, GradingSummary, RegistrationOutcome, ResultsSummary};
use crate::error::ApiError;

// The three remote endpoints are fixed collaborators, not configuration.
// The results function answers POST (grade) and GET (fetch) on one URL.
const REGISTER_URL: &str = "https://functions.poehali.dev/5b1f0e2a-8c43-4a1d-9b77-31e0c2a6f8d4";
const TASKS_URL: &str = "https://functions.poehali.dev/c7d94a6e-12f5-4e8b-a3c9-8e5b71d4f029";
const RESULTS_URL: &str = "https://functions.poehali.dev/1e6a38cf-94d2-47b0-8c15-f273a9b6e05d";

/// Client for the remote competition service.
#[derive(Clone, Default)]
pub struct HttpCompetitionApi {
    client: Client,
}

impl HttpCompetitionApi {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl CompetitionApi for HttpCompetitionApi {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, ApiError> {
        let payload = RegisterBody {
            student_name: &request.student_name,
            school: &request.school,
            class_name: &request.class_name,
            parent_name: &request.parent_name,
            email: &request.email,
            phone: &request.phone,
        };

        let response = self
            .client
            .post(REGISTER_URL)
            .json(&payload)
            .send()
            .await?;
        let response = reject_on_error_status(response).await?;

        let body: RegisterResponse = response.json().await?;
        if !body.success {
            return Err(rejected(body.message));
        }
        let participant = body.participant.ok_or_else(|| rejected(None))?;

        Ok(RegistrationOutcome {
            participant: StoredParticipant::new(
                ParticipantId::new(participant.id),
                participant.student_name,
            ),
            message: body.message,
        })
    }

    #[instrument(skip(self))]
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let response = self.client.get(TASKS_URL).send().await?;
        let response = reject_on_error_status(response).await?;

        let body: TasksResponse = response.json().await?;
        tracing::debug!(total = body.total, "fetched task set");

        let mut tasks: Vec<Task> = body
            .tasks
            .into_iter()
            .map(|task| {
                Task::new(
                    TaskId::new(task.id),
                    task.question,
                    task.points,
                    task.difficulty_level,
                    task.order_number,
                )
            })
            .collect();
        sort_by_display_order(&mut tasks);
        Ok(tasks)
    }

    #[instrument(skip(self, answers), fields(participant = %participant_id, count = answers.len()))]
    async fn submit_answers(
        &self,
        participant_id: ParticipantId,
        answers: &[AnswerRecord],
    ) -> Result<GradingSummary, ApiError> {
        let payload = SubmitBody {
            participant_id: participant_id.value(),
            answers: answers
                .iter()
                .map(|record| AnswerPayload {
                    task_id: record.task_id.value(),
                    answer: &record.answer,
                    time_spent_seconds: record.time_spent_seconds,
                })
                .collect(),
        };

        let response = self.client.post(RESULTS_URL).json(&payload).send().await?;
        let response = reject_on_error_status(response).await?;

        let body: SubmitResponse = response.json().await?;
        if !body.success {
            return Err(rejected(None));
        }

        Ok(GradingSummary {
            correct_count: body.correct_count,
            total_tasks: body.total_tasks,
            total_points: body.total_points,
        })
    }

    #[instrument(skip(self), fields(participant = %participant_id))]
    async fn fetch_results(
        &self,
        participant_id: ParticipantId,
    ) -> Result<ResultsSummary, ApiError> {
        let response = self
            .client
            .get(RESULTS_URL)
            .query(&[("participant_id", participant_id.value())])
            .send()
            .await?;
        let response = reject_on_error_status(response).await?;

        let body: ResultsResponse = response.json().await?;
        let results = body
            .results
            .into_iter()
            .map(|row| TaskResult {
                task_id: TaskId::new(row.task_id),
                question: row.question,
                user_answer: row.user_answer,
                is_correct: row.is_correct,
                points: row.points,
            })
            .collect();

        Ok(ResultsSummary {
            results,
            total_points: body.total_points,
        })
    }
}

/// Pass 2xx responses through; map anything else to `Rejected` when the
/// body carries a server message, `HttpStatus` otherwise.
async fn reject_on_error_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if let Ok(body) = response.json::<ErrorBody>().await {
        if let Some(message) = body.error {
            return Err(ApiError::Rejected { message });
        }
    }
    Err(ApiError::HttpStatus(status))
}

fn rejected(message: Option<String>) -> ApiError {
    ApiError::Rejected {
        message: message.unwrap_or_else(|| "Сервис временно недоступен".to_string()),
    }
}

#[derive(Debug, Serialize)]
struct RegisterBody<'a> {
    student_name: &'a str,
    school: &'a str,
    class_name: &'a str,
    parent_name: &'a str,
    email: &'a str,
    phone: &'a str,
}

#[derive(Debug, Deserialize)]
struct RegisterResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    participant: Option<ParticipantPayload>,
}

#[derive(Debug, Deserialize)]
struct ParticipantPayload {
    id: u64,
    student_name: String,
}

#[derive(Debug, Deserialize)]
struct TasksResponse {
    #[serde(default)]
    tasks: Vec<TaskPayload>,
    #[serde(default)]
    total: u32,
}

#[derive(Debug, Deserialize)]
struct TaskPayload {
    id: u64,
    question: String,
    points: u32,
    difficulty_level: String,
    order_number: u32,
}

#[derive(Debug, Serialize)]
struct SubmitBody<'a> {
    participant_id: u64,
    answers: Vec<AnswerPayload<'a>>,
}

#[derive(Debug, Serialize)]
struct AnswerPayload<'a> {
    task_id: u64,
    answer: &'a str,
    time_spent_seconds: u32,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    correct_count: u32,
    #[serde(default)]
    total_tasks: u32,
    #[serde(default)]
    total_points: u32,
}

#[derive(Debug, Deserialize)]
struct ResultsResponse {
    #[serde(default)]
    results: Vec<ResultPayload>,
    #[serde(default)]
    total_points: u32,
}

#[derive(Debug, Deserialize)]
struct ResultPayload {
    task_id: u64,
    question: String,
    user_answer: String,
    is_correct: bool,
    points: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}
