// Public API exports
pub mod archive;
pub mod chunker;
pub mod config;
pub mod llm;
pub mod pipeline;
pub mod summarizer;
pub mod tokenizer;

// Re-export main types for convenience
pub use config::{ConfigError, SummaryConfig};

pub use tokenizer::{TiktokenTokenizer, Token, Tokenizer, TokenizerError};

pub use chunker::{
    plan_chunks, TokenBudget, DEFAULT_MAX_CONTEXT_TOKENS, DEFAULT_RESPONSE_RESERVE_TOKENS,
};

pub use llm::{ChatClient, ChatMessage, Content, ContentPart, LlmError, Role};

pub use summarizer::{SummarizeError, SummaryBackend, SummaryDriver};

pub use archive::{ArchiveClient, ArchiveError, PageArchive, PageArchiveKind};

pub use pipeline::BatchReport;
