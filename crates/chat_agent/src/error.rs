//! Error types for the chat agent

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("environment variable {0} is not set (add it to the environment or a .env file)")]
    MissingApiKey(String),

    #[error("invalid temperature {0}: expected a value between 0.0 and 2.0")]
    InvalidTemperature(f32),

    #[error("missing value for prompt variable '{0}'")]
    MissingVariable(String),

    #[error("malformed prompt template: {0}")]
    MalformedTemplate(String),

    #[error("OpenAI API error: {0}")]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("model returned no choices")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, AgentError>;
