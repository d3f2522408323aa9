//! chat_agent: a prompt template piped into an OpenAI-compatible chat model
//!
//! This library provides:
//! - Chat prompt templates with `{name}` placeholders and built-in presets
//! - Model configuration read from the environment or a `.env` file
//! - A chat model client backed by `async-openai`
//! - A `Chain` that formats a prompt and sends it to the model
//!
//! # Example
//!
//! ```no_run
//! use chat_agent::{build_model, build_prompt, Chain, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
//!
//! #[tokio::main]
//! async fn main() -> chat_agent::Result<()> {
//!     let chain = build_prompt().pipe(build_model(DEFAULT_MODEL, DEFAULT_TEMPERATURE)?);
//!     let res = chain.invoke(&Chain::input("Hello")).await?;
//!     println!("{}", res.content);
//!     Ok(())
//! }
//! ```

pub mod error;

pub mod config;

pub mod chain;
pub mod model;
pub mod prompt;

pub use error::{AgentError, Result};

pub use config::{
    load_dotenv, ModelConfig, API_KEY_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};

pub use model::{build_model, ChatModel, MessageBuilder, ModelResponse, TokenUsage};

pub use prompt::{
    build_prompt, ChatPromptTemplate, FormattedMessage, MessageRole, MessageTemplate,
    PromptPreset, PromptValues, INPUT_VARIABLE,
};

pub use chain::Chain;
