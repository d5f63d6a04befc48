use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::AppError, models::domain::quiz_question::Question};

/// Quiz produced by one successful generation request. Never empty, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Quiz {
    id: Uuid,
    questions: Vec<Question>,
    difficulty: Difficulty,
    model_id: String,
    created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Quiz {
    /// Returns `None` for an empty question list.
    pub fn new(questions: Vec<Question>, difficulty: Difficulty, model_id: &str) -> Option<Self> {
        if questions.is_empty() {
            return None;
        }

        Some(Quiz {
            id: Uuid::new_v4(),
            questions,
            difficulty,
            model_id: model_id.to_string(),
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    // A quiz always holds at least one question.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(AppError::Validation(format!(
                "Unknown difficulty '{}', expected Easy, Medium or Hard",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_question;

    #[test]
    fn quiz_rejects_empty_question_list() {
        assert!(Quiz::new(vec![], Difficulty::Easy, "llama3-8b-8192").is_none());
    }

    #[test]
    fn quiz_keeps_question_order() {
        let first = sample_question();
        let second = Question::new(
            "Largest planet?",
            ["Mars", "Venus", "Jupiter", "Earth"].map(str::to_string),
            "Jupiter",
        )
        .unwrap();

        let quiz = Quiz::new(vec![first.clone(), second.clone()], Difficulty::Hard, "gemma-7b-it")
            .expect("non-empty quiz");

        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.question(0), Some(&first));
        assert_eq!(quiz.question(1), Some(&second));
        assert_eq!(quiz.question(2), None);
        assert_eq!(quiz.difficulty(), Difficulty::Hard);
        assert_eq!(quiz.model_id(), "gemma-7b-it");
    }

    #[test]
    fn regenerated_quiz_gets_a_new_id() {
        let a = Quiz::new(vec![sample_question()], Difficulty::Easy, "gemma-7b-it").unwrap();
        let b = Quiz::new(vec![sample_question()], Difficulty::Easy, "gemma-7b-it").unwrap();

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("MEDIUM".parse::<Difficulty>().unwrap(), Difficulty::Medium);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!("Extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn difficulty_displays_literal_names() {
        let names: Vec<String> = Difficulty::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
    }
}
