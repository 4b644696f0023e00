mod client;
mod types;


pub use client::{ChatClient, LlmError, OPENAI_BASE_URL};
pub use types::{ChatMessage, ChatResponse, Content, ContentPart, ImageUrl, Role};
