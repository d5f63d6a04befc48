use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{CompletionClient, OpenAiCompatibleClient},
        quiz_service::{GenerationSettings, QuizService},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompatibleClient::new(
            config.provider,
            &config.api_key,
            &config.api_base,
        ));
        Self::with_client(config, client)
    }

    /// Wires the pipeline against any completion backend.
    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        let settings = GenerationSettings::from(&config);
        let quiz_service = Arc::new(QuizService::new(client, settings));

        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
