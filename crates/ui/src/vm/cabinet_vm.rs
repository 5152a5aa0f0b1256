use olymp_core::model::{Scoreboard, TaskResult};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub question: String,
    pub answer_label: String,
    pub status_label: String,
    pub points_label: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CabinetVm {
    pub rows: Vec<ResultRowVm>,
    pub score_label: String,
    pub percent_label: String,
    pub correct_label: String,
}

impl From<&TaskResult> for ResultRowVm {
    fn from(result: &TaskResult) -> Self {
        let status_label = if result.is_correct {
            "Верно".to_string()
        } else {
            "Неверно".to_string()
        };
        Self {
            question: result.question.clone(),
            answer_label: format!("Твой ответ: {}", result.user_answer),
            status_label,
            points_label: format!("{} баллов", result.points),
            is_correct: result.is_correct,
        }
    }
}

#[must_use]
pub fn map_cabinet(board: &Scoreboard) -> CabinetVm {
    CabinetVm {
        rows: board.results().iter().map(ResultRowVm::from).collect(),
        score_label: format!("{} / {}", board.total_points(), board.max_points()),
        percent_label: format!("{}%", board.percent()),
        correct_label: format!("{} из {}", board.correct_count(), board.results().len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use olymp_core::model::TaskId;

    fn result(id: u64, is_correct: bool, points: u32) -> TaskResult {
        TaskResult {
            task_id: TaskId::new(id),
            question: format!("Q{id}"),
            user_answer: "8".to_string(),
            is_correct,
            points,
        }
    }

    #[test]
    fn full_score_labels() {
        let board = Scoreboard::new(
            vec![
                result(1, true, 5),
                result(2, true, 5),
                result(3, true, 10),
                result(4, true, 10),
                result(5, true, 15),
            ],
            45,
            45,
        );
        let vm = map_cabinet(&board);
        assert_eq!(vm.score_label, "45 / 45");
        assert_eq!(vm.percent_label, "100%");
        assert_eq!(vm.correct_label, "5 из 5");
    }

    #[test]
    fn wrong_answer_row_is_marked() {
        let board = Scoreboard::new(vec![result(1, false, 0)], 0, 45);
        let vm = map_cabinet(&board);
        assert_eq!(vm.rows[0].status_label, "Неверно");
        assert_eq!(vm.rows[0].points_label, "0 баллов");
        assert!(!vm.rows[0].is_correct);
    }
}
