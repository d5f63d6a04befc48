use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Question, Quiz, SessionProgress},
        dto::{AnswerFeedback, GenerationOutcome, QuizRequestParams, ReviewEntry},
    },
    services::quiz_service::QuizService,
};

/// User intents that drive a session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    GenerateRequested(QuizRequestParams),
    AnswerSubmitted(String),
    NewQuizRequested,
}

#[derive(Debug, Clone)]
pub enum SessionUpdate {
    QuizReady(GenerationOutcome),
    Answered(AnswerFeedback),
    Cleared,
}

/// One person's quiz and progress. Owned by a single task, so no locking.
#[derive(Debug, Default)]
pub struct QuizSession {
    active: Option<ActiveQuiz>,
}

#[derive(Debug)]
struct ActiveQuiz {
    quiz: Quiz,
    progress: SessionProgress,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn apply(
        &mut self,
        event: SessionEvent,
        service: &QuizService,
    ) -> AppResult<SessionUpdate> {
        match event {
            SessionEvent::GenerateRequested(params) => {
                let outcome = self.regenerate(&params, service).await?;
                Ok(SessionUpdate::QuizReady(outcome))
            }
            SessionEvent::AnswerSubmitted(choice) => {
                let feedback = self.submit_answer(&choice)?;
                Ok(SessionUpdate::Answered(feedback))
            }
            SessionEvent::NewQuizRequested => {
                self.reset();
                Ok(SessionUpdate::Cleared)
            }
        }
    }

    /// Replaces the current quiz on success; clears it on failure.
    pub async fn regenerate(
        &mut self,
        params: &QuizRequestParams,
        service: &QuizService,
    ) -> AppResult<GenerationOutcome> {
        match service.generate(params).await {
            Ok(outcome) => {
                self.start(outcome.quiz.clone());
                Ok(outcome)
            }
            Err(err) => {
                // a rejected request leaves the running quiz alone
                if !matches!(err, AppError::Validation(_)) {
                    self.reset();
                }
                Err(err)
            }
        }
    }

    pub fn start(&mut self, quiz: Quiz) {
        let progress = SessionProgress::new(quiz.len());
        self.active = Some(ActiveQuiz { quiz, progress });
    }

    pub fn reset(&mut self) {
        self.active = None;
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.active.as_ref().map(|a| &a.quiz)
    }

    pub fn progress(&self) -> Option<&SessionProgress> {
        self.active.as_ref().map(|a| &a.progress)
    }

    /// Current question with its 1-based position and the total.
    pub fn current_question(&self) -> Option<(usize, usize, &Question)> {
        let active = self.active.as_ref()?;
        let index = active.progress.current_index;
        active
            .quiz
            .question(index)
            .map(|q| (index + 1, active.quiz.len(), q))
    }

    pub fn is_finished(&self) -> bool {
        self.progress().is_some_and(|p| p.is_finished())
    }

    pub fn score(&self) -> usize {
        self.progress().map(|p| p.score).unwrap_or(0)
    }

    pub fn progress_fraction(&self) -> f32 {
        self.progress().map(|p| p.fraction_complete()).unwrap_or(0.0)
    }

    pub fn submit_answer(&mut self, choice: &str) -> AppResult<AnswerFeedback> {
        let active = self
            .active
            .as_mut()
            .ok_or_else(|| AppError::Validation("No quiz in progress".to_string()))?;

        let question = active
            .quiz
            .question(active.progress.current_index)
            .ok_or_else(|| AppError::Validation("The quiz is already finished".to_string()))?;

        if !question.has_option(choice) {
            return Err(AppError::Validation(
                "Please select one of the options before submitting.".to_string(),
            ));
        }

        let correct = question.is_correct(choice);
        let correct_answer = question.answer().to_string();
        active.progress.record(choice.to_string(), correct);

        Ok(AnswerFeedback {
            correct,
            correct_answer,
            score: active.progress.score,
            finished: active.progress.is_finished(),
        })
    }

    pub fn review(&self) -> Vec<ReviewEntry> {
        let Some(active) = self.active.as_ref() else {
            return Vec::new();
        };

        active
            .quiz
            .questions()
            .iter()
            .zip(&active.progress.user_answers)
            .enumerate()
            .map(|(i, (question, slot))| {
                let user_answer = slot.as_deref().map(str::to_string);
                ReviewEntry {
                    number: i + 1,
                    question: question.text().to_string(),
                    correct: user_answer.as_deref() == Some(question.answer()),
                    user_answer,
                    correct_answer: question.answer().to_string(),
                }
            })
            .collect()
    }
}
