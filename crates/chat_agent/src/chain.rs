//! Prompt-to-model pipeline

use tracing::debug;

use crate::error::Result;
use crate::model::{ChatModel, ModelResponse};
use crate::prompt::{ChatPromptTemplate, FormattedMessage, PromptValues, INPUT_VARIABLE};

/// A prompt template piped into a chat model
pub struct Chain {
    prompt: ChatPromptTemplate,
    model: ChatModel,
}

impl ChatPromptTemplate {
    /// Compose this template with a model
    pub fn pipe(self, model: ChatModel) -> Chain {
        Chain::new(self, model)
    }
}

impl Chain {
    pub fn new(prompt: ChatPromptTemplate, model: ChatModel) -> Self {
        Self { prompt, model }
    }

    pub fn prompt(&self) -> &ChatPromptTemplate {
        &self.prompt
    }

    pub fn model(&self) -> &ChatModel {
        &self.model
    }

    /// Format the prompt with `values`, without sending anything
    pub fn format(&self, values: &PromptValues) -> Result<Vec<FormattedMessage>> {
        let messages = self.prompt.format_messages(values)?;
        debug!(messages = messages.len(), "prompt formatted");
        Ok(messages)
    }

    /// Format the prompt and send it to the model
    pub async fn invoke(&self, values: &PromptValues) -> Result<ModelResponse> {
        let messages = self.format(values)?;
        self.model.invoke(&messages).await
    }

    /// Like `invoke`, streaming each text delta to `on_token`
    pub async fn stream<F>(&self, values: &PromptValues, on_token: F) -> Result<ModelResponse>
    where
        F: FnMut(&str),
    {
        let messages = self.format(values)?;
        self.model.stream(&messages, on_token).await
    }

    /// Values map holding only the `input` placeholder
    pub fn input(text: impl Into<String>) -> PromptValues {
        PromptValues::from([(INPUT_VARIABLE.to_string(), text.into())])
    }
}
