pub mod model_service;
pub mod prompt_builder;
pub mod quiz_parser;
pub mod quiz_service;
pub mod quiz_session_service;
pub mod quiz_validator;

pub use model_service::{CompletionClient, CompletionRequest, OpenAiCompatibleClient};
pub use quiz_service::{GenerationSettings, QuizService};
pub use quiz_session_service::{QuizSession, SessionEvent, SessionUpdate};
