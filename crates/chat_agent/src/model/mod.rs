//! Model module
//!
//! This module provides:
//! - `client`: OpenAI-compatible chat model client
//! - `build_model`: environment-backed client construction

mod client;

pub use client::{ChatModel, MessageBuilder, ModelResponse, TokenUsage};

use crate::config::{load_dotenv, ModelConfig};
use crate::error::Result;

/// Build a chat model from the environment.
///
/// Loads `.env` if present and reads `OPENAI_API_KEY`; fails with
/// `MissingApiKey` when it is absent or empty, before any request is made.
pub fn build_model(model_name: impl Into<String>, temperature: f32) -> Result<ChatModel> {
    load_dotenv();
    build_model_from_process_env(model_name, temperature)
}

fn build_model_from_process_env(
    model_name: impl Into<String>,
    temperature: f32,
) -> Result<ChatModel> {
    let config = ModelConfig::from_process_env()?
        .with_model(model_name)
        .with_temperature(temperature);
    ChatModel::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{API_KEY_ENV, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
    use crate::error::AgentError;
    use std::env;

    // One test for every case: they mutate the same process variable.
    // `.env` is not loaded here so a developer's secrets file cannot mask
    // the unset case.
    #[test]
    fn test_build_model_from_process_env() {
        let saved = env::var(API_KEY_ENV).ok();

        env::remove_var(API_KEY_ENV);
        let err = build_model_from_process_env(DEFAULT_MODEL, DEFAULT_TEMPERATURE).err().unwrap();
        assert!(matches!(err, AgentError::MissingApiKey(name) if name == API_KEY_ENV));

        env::set_var(API_KEY_ENV, "");
        assert!(build_model_from_process_env(DEFAULT_MODEL, DEFAULT_TEMPERATURE).is_err());

        env::set_var(API_KEY_ENV, "sk-from-env");
        let model = build_model_from_process_env(DEFAULT_MODEL, DEFAULT_TEMPERATURE).unwrap();
        assert_eq!(model.model_name(), "gpt-4o-mini");
        assert_eq!(model.temperature(), 0.2);
        assert_eq!(model.config().api_key, "sk-from-env");

        match saved {
            Some(key) => env::set_var(API_KEY_ENV, key),
            None => env::remove_var(API_KEY_ENV),
        }
    }
}
