use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use olymp_core::model::{
    AnswerRecord, ParticipantId, RegistrationRequest, StoredParticipant, Task, TaskId, TaskResult,
};

use crate::api::{CompetitionApi, GradingSummary, RegistrationOutcome, ResultsSummary};
use crate::error::ApiError;

/// In-memory stand-in for the remote competition service, used for
/// tests and prototyping.
///
/// Mirrors the remote semantics: sequential participant ids, duplicate
/// email rejection, grading by literal string equality against the
/// answer key, and per-task result upserts.
#[derive(Default)]
pub struct InMemoryCompetitionApi {
    state: Mutex<MockState>,
}

struct AnsweredTask {
    task: Task,
    correct_answer: String,
}

struct MockState {
    tasks: Vec<AnsweredTask>,
    next_participant_id: u64,
    registered_emails: Vec<String>,
    results: HashMap<ParticipantId, Vec<TaskResult>>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_participant_id: 1,
            registered_emails: Vec::new(),
            results: HashMap::new(),
        }
    }
}

impl InMemoryCompetitionApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stand-in seeded with the competition's five questions and their
    /// answer key.
    #[must_use]
    pub fn with_fixed_tasks() -> Self {
        let api = Self::new();
        {
            let mut state = api.lock_state();
            state.tasks = fixed_task_bank();
        }
        api
    }

    /// Override the next server-issued participant identifier.
    #[must_use]
    pub fn with_next_participant_id(self, id: u64) -> Self {
        {
            let mut state = self.lock_state();
            state.next_participant_id = id;
        }
        self
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CompetitionApi for InMemoryCompetitionApi {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationOutcome, ApiError> {
        let mut state = self.lock_state();

        if state.registered_emails.contains(&request.email) {
            return Err(ApiError::Rejected {
                message: "Этот email уже зарегистрирован".to_string(),
            });
        }

        let id = ParticipantId::new(state.next_participant_id);
        state.next_participant_id += 1;
        state.registered_emails.push(request.email.clone());

        Ok(RegistrationOutcome {
            participant: StoredParticipant::new(id, request.student_name.clone()),
            message: Some(
                "Регистрация успешна! На ваш email будет отправлена ссылка на оплату.".to_string(),
            ),
        })
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let state = self.lock_state();
        let mut tasks: Vec<Task> = state.tasks.iter().map(|entry| entry.task.clone()).collect();
        olymp_core::model::sort_by_display_order(&mut tasks);
        Ok(tasks)
    }

    async fn submit_answers(
        &self,
        participant_id: ParticipantId,
        answers: &[AnswerRecord],
    ) -> Result<GradingSummary, ApiError> {
        let mut state = self.lock_state();

        let mut correct_count = 0_u32;
        let mut total_points = 0_u32;
        let mut graded = Vec::new();

        for record in answers {
            // Unknown task ids are skipped, as the remote does.
            let Some(entry) = state
                .tasks
                .iter()
                .find(|entry| entry.task.id() == record.task_id)
            else {
                continue;
            };

            let is_correct = record.answer.trim() == entry.correct_answer;
            let awarded = if is_correct { entry.task.points() } else { 0 };
            if is_correct {
                correct_count += 1;
                total_points += awarded;
            }

            graded.push(TaskResult {
                task_id: entry.task.id(),
                question: entry.task.question().to_string(),
                user_answer: record.answer.trim().to_string(),
                is_correct,
                points: awarded,
            });
        }

        let rows = state.results.entry(participant_id).or_default();
        for result in graded {
            match rows.iter_mut().find(|row| row.task_id == result.task_id) {
                Some(row) => *row = result,
                None => rows.push(result),
            }
        }

        Ok(GradingSummary {
            correct_count,
            total_tasks: u32::try_from(answers.len()).unwrap_or(u32::MAX),
            total_points,
        })
    }

    async fn fetch_results(
        &self,
        participant_id: ParticipantId,
    ) -> Result<ResultsSummary, ApiError> {
        let state = self.lock_state();

        let order_of = |task_id: TaskId| {
            state
                .tasks
                .iter()
                .find(|entry| entry.task.id() == task_id)
                .map_or(u32::MAX, |entry| entry.task.order_number())
        };

        let mut results = state
            .results
            .get(&participant_id)
            .cloned()
            .unwrap_or_default();
        results.sort_by_key(|row| order_of(row.task_id));

        let total_points = results.iter().map(|row| row.points).sum();
        Ok(ResultsSummary {
            results,
            total_points,
        })
    }
}

fn fixed_task_bank() -> Vec<AnsweredTask> {
    let bank = [
        (
            1_u64,
            "У Маши было 15 конфет. Она съела 7 конфет. Сколько конфет осталось?",
            "8",
            5_u32,
            "easy",
        ),
        (
            2,
            "В классе 12 мальчиков и 14 девочек. Сколько всего детей в классе?",
            "26",
            5,
            "easy",
        ),
        (3, "Сколько будет 9 × 8?", "72", 10, "medium"),
        (
            4,
            "На полке стояло 24 книги. После того, как несколько книг взяли, осталось 18. Сколько книг взяли?",
            "6",
            10,
            "medium",
        ),
        (
            5,
            "Периметр квадрата 20 см. Чему равна длина одной стороны?",
            "5",
            15,
            "hard",
        ),
    ];

    bank.into_iter()
        .enumerate()
        .map(|(index, (id, question, key, points, difficulty))| AnsweredTask {
            task: Task::new(
                TaskId::new(id),
                question,
                points,
                difficulty,
                u32::try_from(index + 1).unwrap_or(u32::MAX),
            ),
            correct_answer: key.to_string(),
        })
        .collect()
}
