mod backend;
mod driver;
pub mod prompts;


pub use driver::{SummarizeError, SummaryDriver};

use async_trait::async_trait;

use crate::llm::LlmError;

/// External text-generation collaborator consumed by the driver.
///
/// One call per chunk plus one revision call; no retries inside. A `None`
/// preamble means the message is omitted entirely (the revision pass), while
/// `Some("")` sends an empty user message the way the original pipeline does.
#[async_trait]
pub trait SummaryBackend: Send + Sync {
    async fn summarize(
        &self,
        system_instruction: &str,
        preamble: Option<&str>,
        content: &str,
    ) -> Result<String, LlmError>;
}
