use serde::Serialize;

use crate::{models::domain::Quiz, services::quiz_validator::DroppedCandidate};

/// Successful generation, possibly with fewer questions than requested.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub quiz: Quiz,
    pub requested_count: u8,
    pub dropped: Vec<DroppedCandidate>,
}

impl GenerationOutcome {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Non-fatal notice when some candidates were excluded.
    pub fn warning(&self) -> Option<String> {
        match self.dropped.len() {
            0 => None,
            1 => Some(
                "1 question was malformed by the AI and has been excluded.".to_string(),
            ),
            n => Some(format!(
                "{} questions were malformed by the AI and have been excluded.",
                n
            )),
        }
    }
}

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer: String,
    pub score: usize,
    pub finished: bool,
}

/// One line of the end-of-quiz review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewEntry {
    pub number: usize,
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
}
