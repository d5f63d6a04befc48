use std::{ops::RangeInclusive, sync::Arc, time::Duration};

use validator::Validate;

use crate::{
    config::{Config, ResponseMode},
    errors::{AppError, AppResult, GenerationError, ProviderError},
    models::{
        domain::Quiz,
        dto::{GenerationOutcome, QuizRequestParams},
    },
    services::{
        model_service::{CompletionClient, CompletionRequest},
        prompt_builder::build_quiz_prompt,
        quiz_parser::parse_quiz_response,
        quiz_validator::validate_candidates,
    },
};

/// Process-wide generation limits, read-only after startup.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub allowed_models: Vec<String>,
    pub question_range: RangeInclusive<u8>,
    pub temperature: f32,
    pub request_timeout: Duration,
    pub response_mode: ResponseMode,
}

impl From<&Config> for GenerationSettings {
    fn from(config: &Config) -> Self {
        Self {
            allowed_models: config
                .allowed_models()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            question_range: config.question_range(),
            temperature: config.temperature,
            request_timeout: config.request_timeout,
            response_mode: config.response_mode,
        }
    }
}

/// Prompt, completion, parse and validate, in that order, once per call.
pub struct QuizService {
    client: Arc<dyn CompletionClient>,
    settings: GenerationSettings,
}

impl QuizService {
    pub fn new(client: Arc<dyn CompletionClient>, settings: GenerationSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Caller-side checks; a failure here means no provider call is made.
    pub fn check_request(&self, params: &QuizRequestParams) -> AppResult<()> {
        params.validate()?;

        if !self.settings.question_range.contains(&params.question_count) {
            return Err(AppError::Validation(format!(
                "Number of questions must be between {} and {}",
                self.settings.question_range.start(),
                self.settings.question_range.end()
            )));
        }

        if !self.settings.allowed_models.iter().any(|m| *m == params.model_id) {
            return Err(AppError::Validation(format!(
                "Model '{}' is not available",
                params.model_id
            )));
        }

        Ok(())
    }

    pub async fn generate(&self, params: &QuizRequestParams) -> AppResult<GenerationOutcome> {
        self.check_request(params)?;

        let outcome = self.run_pipeline(params).await?;
        Ok(outcome)
    }

    async fn run_pipeline(
        &self,
        params: &QuizRequestParams,
    ) -> Result<GenerationOutcome, GenerationError> {
        log::info!(
            "Generating {} {} questions with {}",
            params.question_count,
            params.difficulty,
            params.model_id
        );

        let prompt =
            build_quiz_prompt(&params.notes_text, params.question_count, params.difficulty);
        let request = CompletionRequest {
            model: params.model_id.clone(),
            system: prompt.system,
            user: prompt.user,
            temperature: self.settings.temperature,
            response_mode: self.settings.response_mode,
        };

        let timeout = self.settings.request_timeout;
        let raw_text = tokio::time::timeout(timeout, self.client.complete(request))
            .await
            .map_err(|_| ProviderError::Timeout(timeout))??;

        let payload = parse_quiz_response(&raw_text).map_err(|e| {
            log::warn!("Could not parse completion reply: {}", e);
            e
        })?;

        let candidates = payload.candidates.len();
        let report = validate_candidates(&payload.candidates);

        let quiz = Quiz::new(report.questions, params.difficulty, &params.model_id)
            .ok_or(GenerationError::NoValidQuestions { candidates })?;

        if !report.dropped.is_empty() {
            log::warn!(
                "Kept {} of {} generated questions",
                quiz.len(),
                candidates
            );
        }
        log::info!(
            "Quiz {} generated with {} questions at {}",
            quiz.id(),
            quiz.len(),
            quiz.created_at()
        );

        Ok(GenerationOutcome {
            quiz,
            requested_count: params.question_count,
            dropped: report.dropped,
        })
    }
}
