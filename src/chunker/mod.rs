mod planner;

#[cfg(test)]
mod tests;

pub use planner::{plan_chunks, TokenBudget};

/// Context window assumed for the summarization models (configurable).
pub const DEFAULT_MAX_CONTEXT_TOKENS: usize = 8192;

/// Tokens left free for the model's reply.
pub const DEFAULT_RESPONSE_RESERVE_TOKENS: usize = 500;
