use std::collections::HashMap;

use crate::model::{Task, TaskId};

/// One submitted answer, in the shape the grading endpoint expects.
///
/// `time_spent_seconds` is accepted by the endpoint but not measured by
/// this client; it is always submitted as zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    pub task_id: TaskId,
    pub answer: String,
    pub time_spent_seconds: u32,
}

/// In-memory buffer of the learner's current free-text inputs.
///
/// Held only until submission; the remote service owns the graded copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    entries: HashMap<TaskId, String>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffered text for a task.
    pub fn set(&mut self, task_id: TaskId, text: impl Into<String>) {
        self.entries.insert(task_id, text.into());
    }

    #[must_use]
    pub fn text_for(&self, task_id: TaskId) -> &str {
        self.entries.get(&task_id).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Build submission records in task display order.
    ///
    /// Answers are trimmed; tasks without a buffered entry are skipped.
    #[must_use]
    pub fn to_records(&self, tasks: &[Task]) -> Vec<AnswerRecord> {
        tasks
            .iter()
            .filter_map(|task| {
                self.entries.get(&task.id()).map(|text| AnswerRecord {
                    task_id: task.id(),
                    answer: text.trim().to_string(),
                    time_spent_seconds: 0,
                })
            })
            .collect()
    }
}
