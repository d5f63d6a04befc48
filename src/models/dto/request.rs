use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::Difficulty;

/// Inputs of one generation request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuizRequestParams {
    #[validate(
        length(min = 1, message = "Please paste some notes before generating the quiz."),
        custom(function = "validate_not_blank")
    )]
    pub notes_text: String,

    pub question_count: u8,

    pub difficulty: Difficulty,

    #[validate(length(min = 1))]
    pub model_id: String,
}

impl QuizRequestParams {
    /// Trims the notes; the trimmed text is what ends up in the prompt.
    pub fn new(
        notes_text: &str,
        question_count: u8,
        difficulty: Difficulty,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            notes_text: notes_text.trim().to_string(),
            question_count,
            difficulty,
            model_id: model_id.into(),
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Please paste some notes before generating the quiz.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_request() {
        let params = QuizRequestParams::new(
            "Photosynthesis makes sugar.",
            5,
            Difficulty::Easy,
            "gemma-7b-it",
        );
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_notes_are_trimmed() {
        let params =
            QuizRequestParams::new("  \n Cells divide.\t ", 3, Difficulty::Medium, "gemma-7b-it");
        assert_eq!(params.notes_text, "Cells divide.");
    }

    #[test]
    fn test_empty_notes_rejected() {
        let params = QuizRequestParams::new("", 5, Difficulty::Easy, "gemma-7b-it");
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_blank_notes_rejected_without_trimming() {
        let params = QuizRequestParams {
            notes_text: "   \n\t".to_string(),
            question_count: 5,
            difficulty: Difficulty::Hard,
            model_id: "gemma-7b-it".to_string(),
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_empty_model_rejected() {
        let params = QuizRequestParams::new("Some notes", 5, Difficulty::Easy, "");
        assert!(params.validate().is_err());
    }
}
