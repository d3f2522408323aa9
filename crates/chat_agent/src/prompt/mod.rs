//! Prompt module
//!
//! - `template`: chat prompt templates and placeholder formatting
//! - `presets`: built-in system instructions and `build_prompt`

mod presets;
mod template;

pub use presets::{build_prompt, PromptPreset, INPUT_VARIABLE};
pub use template::{
    ChatPromptTemplate, FormattedMessage, MessageRole, MessageTemplate, PromptValues,
};
