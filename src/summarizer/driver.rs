use thiserror::Error;
use tracing::{debug, info};

use super::SummaryBackend;
use crate::chunker::{plan_chunks, TokenBudget};
use crate::config::{ConfigError, SummaryConfig};
use crate::llm::LlmError;
use crate::tokenizer::{Tokenizer, TokenizerError};

/// Separator between chunk summaries in the draft fed to the revision pass.
const DRAFT_SEPARATOR: &str = "\n\n";

#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Zero-length document: zero chunks, zero calls, no output.
    #[error("document is empty; nothing to summarize")]
    EmptyDocument,

    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),

    #[error(transparent)]
    Backend(#[from] LlmError),
}

/// Two-pass summarization driver.
///
/// Splits a document into token-bounded chunks, summarizes each in order,
/// then revises the concatenated chunk summaries with one final call. Exactly
/// `chunk_count + 1` backend calls per document; the revision pass runs even
/// for a single chunk.
pub struct SummaryDriver<B, T> {
    backend: B,
    tokenizer: T,
    config: SummaryConfig,
    chunk_capacity: usize,
}

impl<B: SummaryBackend, T: Tokenizer> SummaryDriver<B, T> {
    /// Validate the token budget and build a driver. Fails before any
    /// external call if the budget leaves no room for content.
    pub fn new(backend: B, tokenizer: T, config: SummaryConfig) -> Result<Self, ConfigError> {
        let budget = TokenBudget {
            max_context_tokens: config.max_context_tokens,
            system_prompt_tokens: tokenizer.count(&config.system_instruction),
            preamble_tokens: tokenizer.count(&config.preamble),
            response_reserve_tokens: config.response_reserve_tokens,
        };
        let chunk_capacity = budget.chunk_capacity()?;
        debug!(chunk_capacity, "summary driver ready");

        Ok(Self {
            backend,
            tokenizer,
            config,
            chunk_capacity,
        })
    }

    /// Tokens available for document content per chunk.
    pub fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// Summarize one document: chunk pass, then revision pass.
    pub async fn summarize_document(&self, text: &str) -> Result<String, SummarizeError> {
        let tokens = self.tokenizer.encode(text);
        let plan = plan_chunks(&tokens, self.chunk_capacity);
        if plan.is_empty() {
            return Err(SummarizeError::EmptyDocument);
        }

        info!(
            token_count = tokens.len(),
            chunk_count = plan.len(),
            "summarizing document"
        );

        let mut chunk_summaries = Vec::with_capacity(plan.len());
        for (i, slice) in plan.iter().enumerate() {
            let chunk_text = self.tokenizer.decode(slice)?;
            debug!(chunk = i + 1, tokens = slice.len(), "summarizing chunk");
            let summary = self
                .backend
                .summarize(
                    &self.config.system_instruction,
                    Some(&self.config.preamble),
                    &chunk_text,
                )
                .await?;
            chunk_summaries.push(summary.trim().to_string());
        }

        let draft = chunk_summaries.join(DRAFT_SEPARATOR);
        debug!("revising combined summary");
        let revised = self
            .backend
            .summarize(&self.config.system_instruction, None, &draft)
            .await?;

        Ok(revised.trim().to_string())
    }
}
