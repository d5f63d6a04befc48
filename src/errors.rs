use std::time::Duration;

use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Failure of a single generation request, classified at the pipeline boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("No valid questions among {candidates} candidates")]
    NoValidQuestions { candidates: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("completion request failed: {0}")]
    Api(String),

    #[error("provider returned no content")]
    EmptyResponse,

    #[error("model refused the request: {0}")]
    Refused(String),

    #[error("no response within {} seconds", .0.as_secs())]
    Timeout(Duration),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    #[error("JSON object holds no list")]
    NoListFound,

    #[error("unexpected JSON value: {0}")]
    UnexpectedShape(&'static str),
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Generation(err) => err.error_code(),
        }
    }

    /// Message suitable for showing to the person using the quiz.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Configuration(msg) | AppError::Validation(msg) | AppError::Io(msg) => {
                msg.clone()
            }
            AppError::Generation(err) => err.user_message(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Generation(_))
    }
}

impl GenerationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            GenerationError::Provider(_) => "PROVIDER_ERROR",
            GenerationError::Parse(ParseError::MalformedJson(_)) => "MALFORMED_JSON",
            GenerationError::Parse(ParseError::NoListFound) => "NO_LIST_FOUND",
            GenerationError::Parse(ParseError::UnexpectedShape(_)) => "UNEXPECTED_SHAPE",
            GenerationError::NoValidQuestions { .. } => "NO_VALID_QUESTIONS",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Provider(err) => format!("An API error occurred: {}", err),
            GenerationError::Parse(_) => {
                "The AI returned an unexpected JSON structure. Please try again.".to_string()
            }
            GenerationError::NoValidQuestions { .. } => {
                "Could not generate a valid quiz. Please adjust your notes or model and try again."
                    .to_string()
            }
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Generation(err.into())
    }
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Generation(err.into())
    }
}

impl From<OpenAIError> for ProviderError {
    fn from(err: OpenAIError) -> Self {
        ProviderError::Api(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Configuration("missing key".into()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(
            AppError::Validation("empty notes".into()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::from(ParseError::NoListFound).error_code(),
            "NO_LIST_FOUND"
        );
        assert_eq!(
            AppError::from(GenerationError::NoValidQuestions { candidates: 3 }).error_code(),
            "NO_VALID_QUESTIONS"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::Validation("notes are empty".into());
        assert_eq!(err.to_string(), "Validation error: notes are empty");

        let err = AppError::from(ProviderError::Timeout(Duration::from_secs(30)));
        assert_eq!(
            err.to_string(),
            "Provider error: no response within 30 seconds"
        );
    }

    #[test]
    fn test_provider_errors_are_shown_verbatim() {
        let err = AppError::from(ProviderError::Api("rate limit reached".into()));
        assert!(err.user_message().contains("rate limit reached"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_parse_errors_use_generic_message() {
        let err = AppError::from(ParseError::MalformedJson("expected value".into()));
        assert!(err.user_message().contains("unexpected JSON structure"));
        assert!(!err.user_message().contains("expected value"));
    }

    #[test]
    fn test_configuration_errors_are_not_retryable() {
        assert!(!AppError::Configuration("no key".into()).is_retryable());
        assert!(!AppError::Validation("no notes".into()).is_retryable());
    }
}
