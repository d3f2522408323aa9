//! Environment and secrets-file lookup

use std::env;
use tracing::{debug, warn};

use crate::error::{AgentError, Result};

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Optional override for the API base URL
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Load a `.env` file from the working directory (or a parent) if one exists.
///
/// Variables already present in the process environment are not overridden.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "loaded secrets file"),
        Err(e) if e.not_found() => {}
        Err(e) => warn!(error = %e, "failed to load .env file"),
    }
}

/// Read a variable, treating empty or whitespace-only values as unset
pub fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Read an API key from `name`, failing if it is absent or empty
pub fn api_key_from_env(name: &str) -> Result<String> {
    read_var(name).ok_or_else(|| AgentError::MissingApiKey(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_var_unset() {
        assert_eq!(read_var("CHAT_AGENT_TEST_NEVER_SET"), None);
    }

    #[test]
    fn test_read_var_blank_is_unset() {
        env::set_var("CHAT_AGENT_TEST_BLANK", "   ");
        assert_eq!(read_var("CHAT_AGENT_TEST_BLANK"), None);
    }

    #[test]
    fn test_api_key_from_env() {
        let err = api_key_from_env("CHAT_AGENT_TEST_KEY_MISSING").unwrap_err();
        assert!(matches!(err, AgentError::MissingApiKey(name) if name == "CHAT_AGENT_TEST_KEY_MISSING"));

        env::set_var("CHAT_AGENT_TEST_KEY_SET", "sk-test");
        assert_eq!(api_key_from_env("CHAT_AGENT_TEST_KEY_SET").unwrap(), "sk-test");
    }
}
