//! Configuration module
//!
//! This module contains:
//! - `env`: environment variables and `.env` loading
//! - `model_config`: model identifier, temperature and credentials

mod env;
mod model_config;

pub use env::{api_key_from_env, load_dotenv, read_var, API_KEY_ENV, BASE_URL_ENV};
pub use model_config::{ModelConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
