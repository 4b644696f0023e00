use crate::config::ConfigError;
use crate::tokenizer::Token;

/// Token accounting for a single summarization request.
///
/// The capacity left for document content is what remains of the context
/// window after the fixed system instruction, the fixed user preamble, and
/// the space reserved for the model's reply.
#[derive(Debug, Clone, Copy)]
pub struct TokenBudget {
    pub max_context_tokens: usize,
    pub system_prompt_tokens: usize,
    pub preamble_tokens: usize,
    pub response_reserve_tokens: usize,
}

impl TokenBudget {
    /// Tokens available for document content per chunk.
    ///
    /// A non-positive capacity is a configuration error and must be caught
    /// before any external call is made.
    pub fn chunk_capacity(&self) -> Result<usize, ConfigError> {
        let overhead = self.system_prompt_tokens + self.preamble_tokens
            + self.response_reserve_tokens;
        match self.max_context_tokens.checked_sub(overhead) {
            Some(capacity) if capacity > 0 => Ok(capacity),
            _ => Err(ConfigError::NoChunkCapacity {
                max_context_tokens: self.max_context_tokens,
                overhead_tokens: overhead,
            }),
        }
    }
}

/// Partition a token sequence into the minimum number of contiguous,
/// order-preserving slices of at most `capacity` tokens each.
///
/// Fixed-size steps from index 0; the final slice holds the remainder.
/// Boundaries ignore sentence structure on purpose: a cut may fall
/// mid-sentence, and that is the accepted behavior, not a defect.
/// Empty input yields zero chunks and the caller makes zero calls.
///
/// `capacity` normally comes from a validated [`TokenBudget`]. A zero
/// capacity yields zero chunks rather than panicking.
pub fn plan_chunks(tokens: &[Token], capacity: usize) -> Vec<&[Token]> {
    if tokens.is_empty() || capacity == 0 {
        return Vec::new();
    }
    tokens.chunks(capacity).collect()
}
