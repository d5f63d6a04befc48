use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs, ResponseFormat,
        ResponseFormatJsonSchema,
    },
    Client,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use schemars::{schema_for, JsonSchema};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    config::{Provider, ResponseMode},
    errors::ProviderError,
    models::domain::Question,
};

/// Shape requested in `json_schema` mode. The parser unwraps the envelope.
#[derive(JsonSchema)]
#[allow(dead_code)]
struct QuizEnvelope {
    questions: Vec<Question>,
}

/// Fields of a chat-completion reply this client reads; everything else, such as
/// Groq's `service_tier: "on_demand"`, is ignored.
#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    choices: Vec<ReplyChoice>,
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
    refusal: Option<String>,
}

static QUIZ_RESPONSE_SCHEMA: Lazy<serde_json::Value> =
    Lazy::new(|| schema_for!(QuizEnvelope).to_value());

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub response_mode: ResponseMode,
}

/// Narrow seam over a chat-completion service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the system and user messages and returns the raw reply text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}

/// Client for any OpenAI-compatible chat-completion endpoint (Groq, OpenAI).
pub struct OpenAiCompatibleClient {
    client: Client<OpenAIConfig>,
    provider: Provider,
}

impl OpenAiCompatibleClient {
    pub fn new(provider: Provider, api_key: &SecretString, api_base: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(api_base);

        log::info!("Using {} completion endpoint at {}", provider, api_base);

        Self {
            client: Client::with_config(config),
            provider,
        }
    }
}

fn response_format(mode: ResponseMode) -> Option<ResponseFormat> {
    match mode {
        ResponseMode::JsonObject => Some(ResponseFormat::JsonObject),
        ResponseMode::JsonSchema => Some(ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                description: Some("Multiple-choice quiz questions".to_string()),
                name: "quiz".to_string(),
                schema: Some(QUIZ_RESPONSE_SCHEMA.clone()),
                strict: None,
            },
        }),
        ResponseMode::Text => None,
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(request.system)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(request.user)
                .build()?
                .into(),
        ];

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(request.model.as_str())
            .messages(messages)
            .temperature(request.temperature);
        if let Some(format) = response_format(request.response_mode) {
            args.response_format(format);
        }
        let body = args.build()?;

        log::debug!(
            "Sending chat completion to {} (model {})",
            self.provider,
            request.model
        );

        let reply: ChatReply = self.client.chat().create_byot(body).await?;

        let message = reply
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or(ProviderError::EmptyResponse)?;

        if let Some(refusal) = message.refusal.filter(|r| !r.trim().is_empty()) {
            return Err(ProviderError::Refused(refusal));
        }

        match message.content {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(ProviderError::EmptyResponse),
        }
    }
}
