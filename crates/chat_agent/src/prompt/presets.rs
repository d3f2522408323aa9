//! Built-in prompt presets

use super::template::{ChatPromptTemplate, MessageRole};

/// Name of the human-input placeholder used by every preset
pub const INPUT_VARIABLE: &str = "input";

const BACKEND_SYSTEM: &str = "너는 LangChain 기반 백엔드 에이전트다. 응답은 간결하게 한국어로 해라.";
const BACKEND_INPUT: &str = "LangChain Python 에이전트 구조를 분리했어. 확인해줘.";

const EXPERIMENTAL_SYSTEM: &str = "너는 LangChain 기반의 실험 에이전트다. 응답은 간단히.";
const EXPERIMENTAL_INPUT: &str = "LangChain 에이전트 프로젝트 초기화 완료 확인해줘.";

/// Agent persona: a system instruction plus a sample input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptPreset {
    /// Backend agent, answers concisely in Korean
    #[default]
    Backend,
    /// Experimental agent, brief answers
    Experimental,
}

impl PromptPreset {
    /// Parse a preset name, falling back to the default
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "experimental" | "exp" => Self::Experimental,
            _ => Self::Backend,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backend => "backend",
            Self::Experimental => "experimental",
        }
    }

    pub fn system_text(&self) -> &'static str {
        match self {
            Self::Backend => BACKEND_SYSTEM,
            Self::Experimental => EXPERIMENTAL_SYSTEM,
        }
    }

    /// Input sent when the caller supplies none
    pub fn default_input(&self) -> &'static str {
        match self {
            Self::Backend => BACKEND_INPUT,
            Self::Experimental => EXPERIMENTAL_INPUT,
        }
    }

    /// Two-slot template: the system instruction, then `{input}`
    pub fn prompt(&self) -> ChatPromptTemplate {
        ChatPromptTemplate::from_messages([
            (MessageRole::System, self.system_text().to_string()),
            (MessageRole::Human, format!("{{{}}}", INPUT_VARIABLE)),
        ])
    }
}

/// Build the default prompt template
pub fn build_prompt() -> ChatPromptTemplate {
    PromptPreset::default().prompt()
}
