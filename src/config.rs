use std::{env, fmt, ops::RangeInclusive, str::FromStr, time::Duration};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

// QUIZ_MODEL must name one of these; edit the lists when a provider retires a model.
const GROQ_MODELS: &[&str] = &[
    "llama3-8b-8192",
    "llama3-70b-8192",
    "mixtral-8x7b-32768",
    "gemma-7b-it",
];

const OPENAI_MODELS: &[&str] = &["gpt-4o-mini", "gpt-4o", "gpt-4.1-mini", "gpt-4.1"];

const DEFAULT_MIN_QUESTIONS: u8 = 1;
const DEFAULT_MAX_QUESTIONS: u8 = 10;
const DEFAULT_TEMPERATURE: f32 = 0.6;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Chat-completion backend. Both speak the OpenAI wire protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Groq,
    OpenAi,
}

impl Provider {
    pub fn default_api_base(&self) -> &'static str {
        match self {
            Provider::Groq => "https://api.groq.com/openai/v1",
            Provider::OpenAi => "https://api.openai.com/v1",
        }
    }

    pub fn api_key_var(&self) -> &'static str {
        match self {
            Provider::Groq => "GROQ_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// Models a request may select for this provider.
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            Provider::Groq => GROQ_MODELS,
            Provider::OpenAi => OPENAI_MODELS,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Groq => write!(f, "groq"),
            Provider::OpenAi => write!(f, "openai"),
        }
    }
}

impl FromStr for Provider {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "groq" => Ok(Provider::Groq),
            "openai" => Ok(Provider::OpenAi),
            other => Err(AppError::Configuration(format!(
                "Unknown provider '{}', expected 'groq' or 'openai'",
                other
            ))),
        }
    }
}

/// Structured-output hint sent with each completion request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseMode {
    JsonObject,
    JsonSchema,
    Text,
}

impl FromStr for ResponseMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json_object" => Ok(ResponseMode::JsonObject),
            "json_schema" => Ok(ResponseMode::JsonSchema),
            "text" => Ok(ResponseMode::Text),
            other => Err(AppError::Configuration(format!(
                "Unknown response format '{}', expected 'json_object', 'json_schema' or 'text'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub provider: Provider,
    pub api_key: SecretString,
    pub api_base: String,
    pub default_model: String,
    pub min_questions: u8,
    pub max_questions: u8,
    pub temperature: f32,
    pub request_timeout: Duration,
    pub response_mode: ResponseMode,
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Blank values are treated as absent.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let provider: Provider = match get("QUIZ_PROVIDER") {
            Some(raw) => raw.parse()?,
            None => Provider::Groq,
        };

        let api_key = get(provider.api_key_var()).ok_or_else(|| {
            AppError::Configuration(format!(
                "{} not found. Set it in the environment or in a .env file.",
                provider.api_key_var()
            ))
        })?;

        let api_base = get("QUIZ_API_BASE")
            .unwrap_or_else(|| provider.default_api_base().to_string());

        let default_model = match get("QUIZ_MODEL") {
            Some(model) if provider.models().contains(&model.as_str()) => model,
            Some(model) => {
                return Err(AppError::Configuration(format!(
                    "Model '{}' is not available for provider {}",
                    model, provider
                )))
            }
            None => provider.models()[0].to_string(),
        };

        let min_questions = parse_or(&get, "QUIZ_MIN_QUESTIONS", DEFAULT_MIN_QUESTIONS)?;
        let max_questions = parse_or(&get, "QUIZ_MAX_QUESTIONS", DEFAULT_MAX_QUESTIONS)?;
        if min_questions == 0 || min_questions > max_questions {
            return Err(AppError::Configuration(format!(
                "Invalid question count bounds {}..={}",
                min_questions, max_questions
            )));
        }

        let temperature = parse_or(&get, "QUIZ_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AppError::Configuration(format!(
                "QUIZ_TEMPERATURE must be between 0 and 2, got {}",
                temperature
            )));
        }

        let timeout_secs = parse_or(&get, "QUIZ_REQUEST_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(AppError::Configuration(
                "QUIZ_REQUEST_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }

        let response_mode = match get("QUIZ_RESPONSE_FORMAT") {
            Some(raw) => raw.parse()?,
            None => ResponseMode::JsonObject,
        };

        Ok(Self {
            provider,
            api_key: SecretString::from(api_key),
            api_base,
            default_model,
            min_questions,
            max_questions,
            temperature,
            request_timeout: Duration::from_secs(timeout_secs),
            response_mode,
        })
    }

    pub fn question_range(&self) -> RangeInclusive<u8> {
        self.min_questions..=self.max_questions
    }

    pub fn allowed_models(&self) -> &'static [&'static str] {
        self.provider.models()
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            provider: Provider::Groq,
            api_key: SecretString::from("test_api_key".to_string()),
            api_base: "http://127.0.0.1:9".to_string(),
            default_model: "llama3-8b-8192".to_string(),
            min_questions: 1,
            max_questions: 10,
            temperature: 0.6,
            request_timeout: Duration::from_secs(5),
            response_mode: ResponseMode::JsonObject,
        }
    }
}

fn parse_or<T, F>(get: &F, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            AppError::Configuration(format!("{} has an invalid value '{}'", key, raw))
        }),
        None => Ok(default),
    }
}
