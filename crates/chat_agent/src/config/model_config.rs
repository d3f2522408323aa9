//! Model configuration

use std::fmt;

use super::env::{api_key_from_env, load_dotenv, read_var, API_KEY_ENV, BASE_URL_ENV};
use crate::error::{AgentError, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the remote chat model
#[derive(Clone, PartialEq)]
pub struct ModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model_name: String,
    pub temperature: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            model_name: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

// The key never ends up in logs.
impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("model_name", &self.model_name)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl ModelConfig {
    /// Create a new ModelConfig for the given model
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            ..Default::default()
        }
    }

    /// Default config with the API key and base URL taken from the
    /// environment, after loading a `.env` file if present.
    ///
    /// Fails with `MissingApiKey` if the key is absent or empty.
    pub fn from_env() -> Result<Self> {
        load_dotenv();
        Self::from_process_env()
    }

    /// Like `from_env`, reading only the process environment.
    pub fn from_process_env() -> Result<Self> {
        let mut config = Self::default().with_api_key(api_key_from_env(API_KEY_ENV)?);
        if let Some(url) = read_var(BASE_URL_ENV) {
            config.base_url = url;
        }
        Ok(config)
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set the model name
    pub fn with_model(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AgentError::MissingApiKey(API_KEY_ENV.to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AgentError::InvalidTemperature(self.temperature));
        }
        Ok(())
    }
}
