use schemars::JsonSchema;
use serde::Serialize;

/// Multiple-choice question whose answer is always one of its four options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Question {
    #[serde(rename = "question")]
    text: String,
    options: [String; 4],
    answer: String,
}

impl Question {
    /// Returns `None` when `answer` is not exactly equal to one of `options`.
    pub fn new(
        text: impl Into<String>,
        options: [String; 4],
        answer: impl Into<String>,
    ) -> Option<Self> {
        let answer = answer.into();
        if !options.contains(&answer) {
            return None;
        }

        Some(Self {
            text: text.into(),
            options,
            answer,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.answer == choice
    }

    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|o| o == choice)
    }
}
