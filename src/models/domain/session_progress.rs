use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum AnswerSlot {
    Unanswered,
    Answered(String),
}

/// Position, score and submitted answers for one quiz being taken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub current_index: usize,
    pub score: usize,
    pub user_answers: Vec<AnswerSlot>,
}

impl SessionProgress {
    pub fn new(question_count: usize) -> Self {
        Self {
            current_index: 0,
            score: 0,
            user_answers: vec![AnswerSlot::Unanswered; question_count],
        }
    }

    pub fn total(&self) -> usize {
        self.user_answers.len()
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.total()
    }

    /// Fraction of questions already submitted, in `0.0..=1.0`.
    pub fn fraction_complete(&self) -> f32 {
        if self.total() == 0 {
            return 0.0;
        }
        self.current_index.min(self.total()) as f32 / self.total() as f32
    }

    /// Stores the answer for the current question and moves on.
    pub(crate) fn record(&mut self, choice: String, correct: bool) {
        if let Some(slot) = self.user_answers.get_mut(self.current_index) {
            *slot = AnswerSlot::Answered(choice);
            if correct {
                self.score += 1;
            }
            self.current_index += 1;
        }
    }
}

impl AnswerSlot {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            AnswerSlot::Unanswered => None,
            AnswerSlot::Answered(choice) => Some(choice),
        }
    }
}
