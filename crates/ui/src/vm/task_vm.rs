use olymp_core::model::{Task, TaskId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskCardVm {
    pub id: TaskId,
    pub number: u32,
    pub question: String,
    pub points_label: String,
    pub difficulty_label: String,
}

impl From<&Task> for TaskCardVm {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            number: task.order_number(),
            question: task.question().to_string(),
            points_label: format!("{} баллов", task.points()),
            difficulty_label: difficulty_label(task.difficulty_level()).to_string(),
        }
    }
}

#[must_use]
pub fn map_task_cards(tasks: &[Task]) -> Vec<TaskCardVm> {
    tasks.iter().map(TaskCardVm::from).collect()
}

/// The service sends English difficulty levels; unknown values pass
/// through unchanged.
fn difficulty_label(level: &str) -> &str {
    match level {
        "easy" => "лёгкая",
        "medium" => "средняя",
        "hard" => "сложная",
        other => other,
    }
}
