//! Chat prompt templates: ordered role/text slots with `{name}` placeholders

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::error::{AgentError, Result};

/// Role of a message slot in a chat prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    Human,
    Ai,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Human => "human",
            Self::Ai => "ai",
        }
    }
}

/// A single message slot: a role plus a template string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub role: MessageRole,
    pub template: String,
}

/// A message after placeholder substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Values used to fill template placeholders
pub type PromptValues = HashMap<String, String>;

/// Ordered list of message templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPromptTemplate {
    messages: Vec<MessageTemplate>,
}

impl ChatPromptTemplate {
    /// Build a template from `(role, template)` pairs, keeping their order
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = (MessageRole, S)>,
        S: Into<String>,
    {
        Self {
            messages: messages
                .into_iter()
                .map(|(role, template)| MessageTemplate {
                    role,
                    template: template.into(),
                })
                .collect(),
        }
    }

    pub fn messages(&self) -> &[MessageTemplate] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Names of all placeholders across every slot, sorted
    pub fn input_variables(&self) -> Result<BTreeSet<String>> {
        let mut vars = BTreeSet::new();
        for message in &self.messages {
            for segment in parse(&message.template)? {
                if let Segment::Variable(name) = segment {
                    vars.insert(name.to_string());
                }
            }
        }
        Ok(vars)
    }

    /// Substitute placeholders in every slot
    pub fn format_messages(&self, values: &PromptValues) -> Result<Vec<FormattedMessage>> {
        self.messages
            .iter()
            .map(|message| {
                Ok(FormattedMessage {
                    role: message.role,
                    content: render(&message.template, values)?,
                })
            })
            .collect()
    }
}

enum Segment<'a> {
    Literal(&'a str),
    Brace(char),
    Variable(&'a str),
}

fn parse(template: &str) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '{' | '}' => {
                if literal_start < idx {
                    segments.push(Segment::Literal(&template[literal_start..idx]));
                }
                if chars.peek().map(|&(_, next)| next) == Some(c) {
                    chars.next();
                    segments.push(Segment::Brace(c));
                    literal_start = idx + 2;
                    continue;
                }
                if c == '}' {
                    return Err(AgentError::MalformedTemplate(format!(
                        "unmatched '}}' at byte {}",
                        idx
                    )));
                }

                let name_start = idx + 1;
                let close = template[name_start..].find('}').ok_or_else(|| {
                    AgentError::MalformedTemplate(format!("unclosed '{{' at byte {}", idx))
                })?;
                let name = template[name_start..name_start + close].trim();
                if name.is_empty() || name.contains('{') {
                    return Err(AgentError::MalformedTemplate(format!(
                        "invalid placeholder at byte {}",
                        idx
                    )));
                }
                segments.push(Segment::Variable(name));

                let end = name_start + close;
                while chars.peek().is_some_and(|&(i, _)| i <= end) {
                    chars.next();
                }
                literal_start = end + 1;
            }
            _ => {}
        }
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(&template[literal_start..]));
    }
    Ok(segments)
}

fn render(template: &str, values: &PromptValues) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template)? {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Brace(c) => out.push(c),
            Segment::Variable(name) => {
                let value = values
                    .get(name)
                    .ok_or_else(|| AgentError::MissingVariable(name.to_string()))?;
                out.push_str(value);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> PromptValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_messages_keeps_order() {
        let prompt = ChatPromptTemplate::from_messages([
            (MessageRole::System, "sys"),
            (MessageRole::Human, "{input}"),
            (MessageRole::Ai, "ok"),
        ]);
        let roles: Vec<_> = prompt.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::System, MessageRole::Human, MessageRole::Ai]
        );
    }

    #[test]
    fn test_format_substitutes_placeholders() {
        let prompt = ChatPromptTemplate::from_messages([
            (MessageRole::System, "You are {persona}."),
            (MessageRole::Human, "{input}"),
        ]);
        let formatted = prompt
            .format_messages(&values(&[("persona", "terse"), ("input", "hello")]))
            .unwrap();

        assert_eq!(formatted[0].content, "You are terse.");
        assert_eq!(formatted[1].role, MessageRole::Human);
        assert_eq!(formatted[1].content, "hello");
    }

    #[test]
    fn test_escaped_braces_are_literal() {
        let prompt =
            ChatPromptTemplate::from_messages([(MessageRole::Human, "json: {{\"q\": \"{ q }\"}}")]);
        let formatted = prompt.format_messages(&values(&[("q", "x")])).unwrap();
        assert_eq!(formatted[0].content, "json: {\"q\": \"x\"}");
        assert_eq!(
            prompt.input_variables().unwrap().into_iter().collect::<Vec<_>>(),
            vec!["q".to_string()]
        );
    }

    #[test]
    fn test_missing_variable() {
        let prompt = ChatPromptTemplate::from_messages([(MessageRole::Human, "{input}")]);
        let err = prompt.format_messages(&PromptValues::new()).unwrap_err();
        assert!(matches!(err, AgentError::MissingVariable(name) if name == "input"));
    }

    #[test]
    fn test_unbalanced_braces() {
        for bad in ["{input", "input}", "{}", "{a{b}"] {
            let prompt = ChatPromptTemplate::from_messages([(MessageRole::Human, bad)]);
            let err = prompt
                .format_messages(&values(&[("input", "x"), ("a", "y")]))
                .unwrap_err();
            assert!(
                matches!(err, AgentError::MalformedTemplate(_)),
                "expected malformed for {bad:?}"
            );
        }
    }

    #[test]
    fn test_values_are_not_reinterpreted() {
        let prompt = ChatPromptTemplate::from_messages([(MessageRole::Human, "{input}")]);
        let formatted = prompt
            .format_messages(&values(&[("input", "{not_a_var}")]))
            .unwrap();
        assert_eq!(formatted[0].content, "{not_a_var}");
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&MessageRole::Human).unwrap();
        assert_eq!(json, "\"human\"");
        assert_eq!(MessageRole::Ai.as_str(), "ai");
    }
}
