pub mod request;
pub mod response;

pub use request::QuizRequestParams;
pub use response::{AnswerFeedback, GenerationOutcome, ReviewEntry};
