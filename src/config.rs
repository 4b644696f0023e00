use std::env;

use thiserror::Error;

use crate::chunker::{DEFAULT_MAX_CONTEXT_TOKENS, DEFAULT_RESPONSE_RESERVE_TOKENS};
use crate::summarizer::prompts;

/// Environment variable holding the API key. Never logged.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "token budget leaves no room for content: context {max_context_tokens} - \
         overhead {overhead_tokens} <= 0"
    )]
    NoChunkCapacity {
        max_context_tokens: usize,
        overhead_tokens: usize,
    },

    #[error("{API_KEY_VAR} is not set")]
    MissingApiKey,
}

/// Everything the summarization driver needs, passed explicitly at
/// construction. No process-wide globals.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Generation model identifier (also selects the tokenizer).
    pub model: String,
    /// Fixed system instruction sent with every call.
    pub system_instruction: String,
    /// Fixed user preamble sent before each chunk. May be empty; the
    /// original pipeline sends it either way.
    pub preamble: String,
    /// Total context window of the model, in tokens.
    pub max_context_tokens: usize,
    /// Tokens reserved for the model's reply.
    pub response_reserve_tokens: usize,
}

impl SummaryConfig {
    /// Configuration for the archival-transcript summarizer.
    pub fn archivist(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_instruction: prompts::ARCHIVIST_SYSTEM.to_string(),
            preamble: String::new(),
            max_context_tokens: DEFAULT_MAX_CONTEXT_TOKENS,
            response_reserve_tokens: DEFAULT_RESPONSE_RESERVE_TOKENS,
        }
    }
}

/// Read the API key from the environment.
pub fn api_key_from_env() -> Result<String, ConfigError> {
    env::var(API_KEY_VAR).map_err(|_| ConfigError::MissingApiKey)
}
