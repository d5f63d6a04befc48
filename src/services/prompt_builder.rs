use crate::{
    constants::quiz_prompt::{QUIZ_SYSTEM_PROMPT, QUIZ_USER_PROMPT_TEMPLATE},
    models::domain::Difficulty,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPrompt {
    pub system: String,
    pub user: String,
}

/// Builds the system and user messages for one quiz request.
pub fn build_quiz_prompt(
    notes_text: &str,
    question_count: u8,
    difficulty: Difficulty,
) -> QuizPrompt {
    // notes go in last so their content is never treated as a placeholder
    let user = QUIZ_USER_PROMPT_TEMPLATE
        .replace("{question_count}", &question_count.to_string())
        .replace("{difficulty}", &difficulty.to_string())
        .replace("{notes}", notes_text);

    QuizPrompt {
        system: QUIZ_SYSTEM_PROMPT.to_string(),
        user,
    }
}
