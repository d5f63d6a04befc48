pub mod quiz;
pub mod quiz_question;
pub mod session_progress;
pub use quiz::{Difficulty, Quiz};
pub use quiz_question::Question;
pub use session_progress::{AnswerSlot, SessionProgress};
