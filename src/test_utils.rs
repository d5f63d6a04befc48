#[cfg(test)]
pub mod fixtures {
    use std::time::Duration;

    use crate::{
        config::ResponseMode,
        models::{
            domain::{Difficulty, Question, Quiz},
            dto::QuizRequestParams,
        },
        services::quiz_service::GenerationSettings,
    };

    /// One valid question followed by one with only two options.
    pub const VALID_AND_SHORT_REPLY: &str = r#"[{"question":"2+2?","options":["3","4","5","6"],"answer":"4"},{"question":"bad","options":["a","b"],"answer":"a"}]"#;

    pub const TWO_QUESTION_REPLY: &str = r#"{"quiz": [
        {"question": "2+2?", "options": ["3", "4", "5", "6"], "answer": "4"},
        {"question": "Largest planet?", "options": ["Mars", "Venus", "Jupiter", "Earth"], "answer": "Jupiter"}
    ]}"#;

    pub fn sample_question() -> Question {
        Question::new("2+2?", ["3", "4", "5", "6"].map(str::to_string), "4")
            .expect("answer is among the options")
    }

    /// Two questions: "2+2?" (answer "4") and "Largest planet?" (answer "Jupiter").
    pub fn sample_quiz() -> Quiz {
        let planet = Question::new(
            "Largest planet?",
            ["Mars", "Venus", "Jupiter", "Earth"].map(str::to_string),
            "Jupiter",
        )
        .expect("answer is among the options");

        Quiz::new(vec![sample_question(), planet], Difficulty::Medium, "llama3-8b-8192")
            .expect("quiz has questions")
    }

    pub fn sample_params() -> QuizRequestParams {
        QuizRequestParams::new(
            "The mitochondria is the powerhouse of the cell.",
            3,
            Difficulty::Medium,
            "llama3-8b-8192",
        )
    }

    pub fn test_settings() -> GenerationSettings {
        GenerationSettings {
            allowed_models: vec![
                "llama3-8b-8192".to_string(),
                "llama3-70b-8192".to_string(),
                "mixtral-8x7b-32768".to_string(),
                "gemma-7b-it".to_string(),
            ],
            question_range: 1..=10,
            temperature: 0.6,
            request_timeout: Duration::from_secs(5),
            response_mode: ResponseMode::JsonObject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::{quiz_parser::parse_quiz_response, quiz_validator::validate_candidates};

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz();
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.questions()[1].answer(), "Jupiter");
    }

    #[test]
    fn test_fixtures_replies_parse() {
        let two = parse_quiz_response(TWO_QUESTION_REPLY).unwrap();
        assert_eq!(validate_candidates(&two.candidates).questions.len(), 2);

        let mixed = parse_quiz_response(VALID_AND_SHORT_REPLY).unwrap();
        assert_eq!(validate_candidates(&mixed.candidates).dropped_count(), 1);
    }

    #[test]
    fn test_fixtures_sample_params_fit_settings() {
        let params = sample_params();
        let settings = test_settings();

        assert!(settings.question_range.contains(&params.question_count));
        assert!(settings.allowed_models.contains(&params.model_id));
    }
}
