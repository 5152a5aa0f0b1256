use crate::model::TaskId;

/// One graded question, owned by the remote service and read-only on the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    question: String,
    points: u32,
    difficulty_level: String,
    order_number: u32,
}

impl Task {
    #[must_use]
    pub fn new(
        id: TaskId,
        question: impl Into<String>,
        points: u32,
        difficulty_level: impl Into<String>,
        order_number: u32,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            points,
            difficulty_level: difficulty_level.into(),
            order_number,
        }
    }

    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn difficulty_level(&self) -> &str {
        &self.difficulty_level
    }

    #[must_use]
    pub fn order_number(&self) -> u32 {
        self.order_number
    }
}

/// Sort tasks by display order, then by id for stable ties.
pub fn sort_by_display_order(tasks: &mut [Task]) {
    tasks.sort_by(|left, right| {
        left.order_number
            .cmp(&right.order_number)
            .then_with(|| left.id.cmp(&right.id))
    });
}
