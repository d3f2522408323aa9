//! Chat model client for OpenAI-compatible chat-completion APIs

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CompletionUsage, CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
        CreateChatCompletionResponse,
    },
    Client,
};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::config::ModelConfig;
use crate::error::{AgentError, Result};
use crate::prompt::{FormattedMessage, MessageRole};

/// Token accounting reported by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl From<CompletionUsage> for TokenUsage {
    fn from(usage: CompletionUsage) -> Self {
        Self {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

/// Response from the chat model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    pub content: String,
    pub model: String,
    pub usage: Option<TokenUsage>,
}

impl ModelResponse {
    fn from_completion(response: CreateChatCompletionResponse) -> Result<Self> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(AgentError::EmptyResponse)?;

        Ok(Self {
            content: choice.message.content.unwrap_or_default(),
            model: response.model,
            usage: response.usage.map(TokenUsage::from),
        })
    }
}

/// Client bound to one model, temperature and credential
pub struct ChatModel {
    config: ModelConfig,
    client: Client<OpenAIConfig>,
}

impl ChatModel {
    /// Create a new ChatModel.
    ///
    /// Fails if the config has no API key or an out-of-range temperature.
    /// No request is sent.
    pub fn new(config: ModelConfig) -> Result<Self> {
        config.validate()?;

        let openai_config = OpenAIConfig::new()
            .with_api_base(&config.base_url)
            .with_api_key(&config.api_key);

        let client = Client::with_config(openai_config);
        debug!(model = %config.model_name, temperature = config.temperature, "chat model ready");

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn model_name(&self) -> &str {
        &self.config.model_name
    }

    pub fn temperature(&self) -> f32 {
        self.config.temperature
    }

    fn build_request(
        &self,
        messages: Vec<ChatCompletionRequestMessage>,
        stream: bool,
    ) -> Result<CreateChatCompletionRequest> {
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(&self.config.model_name)
            .temperature(self.config.temperature)
            .messages(messages);
        if stream {
            args.stream(true);
        }
        Ok(args.build()?)
    }

    /// Send one chat-completion request and return the first choice
    pub async fn invoke(&self, messages: &[FormattedMessage]) -> Result<ModelResponse> {
        let start_time = Instant::now();
        let request = self.build_request(MessageBuilder::build_all(messages)?, false)?;

        info!(
            model = %self.config.model_name,
            messages = messages.len(),
            "sending chat completion request"
        );
        let response = self.client.chat().create(request).await?;
        let response = ModelResponse::from_completion(response)?;

        debug!(
            elapsed_secs = start_time.elapsed().as_secs_f64(),
            total_tokens = response.usage.map(|u| u.total_tokens),
            "chat completion finished"
        );
        Ok(response)
    }

    /// Streamed variant of `invoke`: `on_token` sees each text delta as it
    /// arrives, the full text is returned at the end.
    pub async fn stream<F>(
        &self,
        messages: &[FormattedMessage],
        mut on_token: F,
    ) -> Result<ModelResponse>
    where
        F: FnMut(&str),
    {
        let start_time = Instant::now();
        let mut time_to_first_token: Option<f64> = None;
        let request = self.build_request(MessageBuilder::build_all(messages)?, true)?;

        info!(
            model = %self.config.model_name,
            messages = messages.len(),
            "streaming chat completion request"
        );
        let mut stream = self.client.chat().create_stream(request).await?;

        let mut content = String::new();
        let mut model = self.config.model_name.clone();

        while let Some(result) = stream.next().await {
            let chunk = result?;
            model = chunk.model;
            for choice in chunk.choices {
                if let Some(delta) = choice.delta.content {
                    if time_to_first_token.is_none() {
                        time_to_first_token = Some(start_time.elapsed().as_secs_f64());
                    }
                    on_token(&delta);
                    content.push_str(&delta);
                }
            }
        }

        debug!(
            time_to_first_token,
            total_secs = start_time.elapsed().as_secs_f64(),
            "chat completion stream finished"
        );

        Ok(ModelResponse {
            content,
            model,
            usage: None,
        })
    }
}

/// Helper for turning formatted prompt messages into request messages
pub struct MessageBuilder;

impl MessageBuilder {
    /// Convert one formatted message to its request form
    pub fn build(message: &FormattedMessage) -> Result<ChatCompletionRequestMessage> {
        let content = message.content.as_str();
        let request = match message.role {
            MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(content)
                .build()?
                .into(),
            MessageRole::Human => ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()?
                .into(),
            MessageRole::Ai => ChatCompletionRequestAssistantMessageArgs::default()
                .content(content)
                .build()?
                .into(),
        };
        Ok(request)
    }

    pub fn build_all(messages: &[FormattedMessage]) -> Result<Vec<ChatCompletionRequestMessage>> {
        messages.iter().map(Self::build).collect()
    }
}
