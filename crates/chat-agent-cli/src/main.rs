//! chat-agent - send one prompt through a chat model and print the reply
//!
//! Usage:
//!     chat-agent [OPTIONS] [INPUT]
//!
//! Environment Variables:
//!     OPENAI_API_KEY: API key for the model provider (required)
//!     OPENAI_BASE_URL: API base URL (default: https://api.openai.com/v1)
//!     CHAT_AGENT_MODEL: Model name (default: gpt-4o-mini)
//!     CHAT_AGENT_TEMPERATURE: Sampling temperature (default: 0.2)
//!     CHAT_AGENT_PRESET: Prompt preset, backend or experimental (default: backend)
//!     RUST_LOG: Log filter (default: warn, or debug with --verbose)

use anyhow::{Context, Result};
use chat_agent::{
    load_dotenv, Chain, ChatModel, ModelConfig, ModelResponse, PromptPreset, DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Chat Agent - prompt template piped into a hosted chat model
#[derive(Parser, Debug)]
#[command(name = "chat-agent")]
#[command(about = "Send one prompt through a hosted chat model and print the reply")]
#[command(after_help = r#"Examples:
    # Run the default preset with its built-in input
    chat-agent

    # Ask something else
    chat-agent "모듈 구조를 요약해줘"

    # Use the experimental preset and stream tokens as they arrive
    chat-agent --preset experimental --stream

    # Point at an OpenAI-compatible server
    chat-agent --base-url http://localhost:8000/v1 --model my-model
"#)]
struct Cli {
    /// Model name
    #[arg(long, env = "CHAT_AGENT_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long, env = "CHAT_AGENT_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// API base URL (overrides OPENAI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Prompt preset
    #[arg(long, env = "CHAT_AGENT_PRESET", default_value = "backend", value_parser = ["backend", "experimental"])]
    preset: String,

    /// Print tokens as they arrive
    #[arg(long)]
    stream: bool,

    /// Print the full response as JSON
    #[arg(long, conflicts_with = "stream")]
    json: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Input for the human message (preset's sample input if not provided)
    input: Option<String>,
}

impl Cli {
    fn preset(&self) -> PromptPreset {
        PromptPreset::from_str(&self.preset)
    }

    fn input(&self) -> String {
        self.input
            .clone()
            .unwrap_or_else(|| self.preset().default_input().to_string())
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn model_config(args: &Cli) -> Result<ModelConfig> {
    let mut config = ModelConfig::from_env()?
        .with_model(&args.model)
        .with_temperature(args.temperature);

    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }

    Ok(config)
}

fn print_response(response: &ModelResponse, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(response).context("serializing response")?;
        println!("{}", out);
    } else {
        println!("{}", response.content);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so .env can supply CHAT_AGENT_* defaults too.
    load_dotenv();
    let args = Cli::parse();
    init_logging(args.verbose);

    let preset = args.preset();
    let config = model_config(&args)?;
    info!(
        preset = preset.as_str(),
        model = %config.model_name,
        base_url = %config.base_url,
        "starting chat agent"
    );

    let chain = preset.prompt().pipe(ChatModel::new(config)?);
    let values = Chain::input(args.input());

    if args.stream {
        let mut stdout = io::stdout();
        chain
            .stream(&values, |token| {
                print!("{}", token);
                stdout.flush().ok();
            })
            .await?;
        println!();
    } else {
        let response = chain.invoke(&values).await?;
        print_response(&response, args.json)?;
    }

    Ok(())
}
