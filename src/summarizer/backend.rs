use async_trait::async_trait;

use super::SummaryBackend;
use crate::llm::{ChatClient, ChatMessage, LlmError, Role};

#[async_trait]
impl SummaryBackend for ChatClient {
    async fn summarize(
        &self,
        system_instruction: &str,
        preamble: Option<&str>,
        content: &str,
    ) -> Result<String, LlmError> {
        let mut messages = vec![ChatMessage::text(Role::System, system_instruction)];
        if let Some(preamble) = preamble {
            messages.push(ChatMessage::text(Role::User, preamble));
        }
        messages.push(ChatMessage::text(Role::User, content));

        self.complete(messages).await
    }
}
