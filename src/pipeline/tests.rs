use std::fs;

use async_trait::async_trait;
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use super::*;
use crate::archive::ArchiveClient;
use crate::config::SummaryConfig;
use crate::llm::{ChatClient, LlmError};
use crate::summarizer::{SummaryBackend, SummaryDriver};
use crate::tokenizer::{Token, Tokenizer, TokenizerError};

struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn encode(&self, text: &str) -> Vec<Token> {
        text.chars().map(|c| c as u32).collect()
    }

    fn decode(&self, tokens: &[Token]) -> Result<String, TokenizerError> {
        tokens
            .iter()
            .map(|&t| {
                char::from_u32(t).ok_or_else(|| TokenizerError::Decode(format!("bad token {t}")))
            })
            .collect()
    }
}

/// Echo backend that fails for content containing the marker.
struct EchoBackend {
    fail_on: Option<&'static str>,
}

#[async_trait]
impl SummaryBackend for EchoBackend {
    async fn summarize(
        &self,
        _system: &str,
        _preamble: Option<&str>,
        content: &str,
    ) -> Result<String, LlmError> {
        if let Some(marker) = self.fail_on {
            if content.contains(marker) {
                return Err(LlmError::ApiError {
                    status: 500,
                    body: "mock failure".into(),
                });
            }
        }
        Ok(format!("summary of: {content}"))
    }
}

fn driver(fail_on: Option<&'static str>) -> SummaryDriver<EchoBackend, CharTokenizer> {
    let config = SummaryConfig {
        model: "mock".into(),
        system_instruction: String::new(),
        preamble: String::new(),
        max_context_tokens: 10_000,
        response_reserve_tokens: 0,
    };
    SummaryDriver::new(EchoBackend { fail_on }, CharTokenizer, config).unwrap()
}

#[tokio::test]
async fn test_transcripts_write_prefixed_summaries() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(source.path().join("letter.txt"), "Dear sir,\nregards").unwrap();
    fs::write(source.path().join("diary.txt"), "Day one.").unwrap();
    fs::write(source.path().join("notes.md"), "not a transcript").unwrap();

    let report = run_transcripts(&driver(None), source.path(), output.path())
        .await
        .unwrap();

    assert_eq!(
        report,
        BatchReport {
            written: 2,
            skipped: 0,
            failed: 0
        }
    );

    // Line breaks collapsed before summarization.
    let letter = fs::read_to_string(output.path().join("gpt_letter.txt")).unwrap();
    assert_eq!(letter, "summary of: summary of: Dear sir, regards");
    assert!(output.path().join("gpt_diary.txt").exists());
    assert!(!output.path().join("gpt_notes.md").exists());
}

#[tokio::test]
async fn test_failing_document_writes_nothing_and_batch_continues() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(source.path().join("a.txt"), "fine text").unwrap();
    fs::write(source.path().join("b.txt"), "contains POISON here").unwrap();
    fs::write(source.path().join("c.txt"), "also fine").unwrap();

    let report = run_transcripts(&driver(Some("POISON")), source.path(), output.path())
        .await
        .unwrap();

    assert_eq!(report.written, 2);
    assert_eq!(report.failed, 1);
    assert!(output.path().join("gpt_a.txt").exists());
    assert!(!output.path().join("gpt_b.txt").exists());
    assert!(output.path().join("gpt_c.txt").exists());
}

#[tokio::test]
async fn test_empty_transcript_is_skipped_without_output() {
    let source = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(source.path().join("empty.txt"), "").unwrap();

    let report = run_transcripts(&driver(None), source.path(), output.path())
        .await
        .unwrap();

    assert_eq!(
        report,
        BatchReport {
            written: 0,
            skipped: 1,
            failed: 0
        }
    );
    assert!(!output.path().join("gpt_empty.txt").exists());
}

#[tokio::test]
async fn test_missing_source_directory_is_fatal() {
    let output = TempDir::new().unwrap();
    let missing = output.path().join("does-not-exist");

    let result = run_transcripts(&driver(None), &missing, output.path()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_frontpages_end_to_end_with_one_bad_identifier() {
    let server = MockServer::start_async().await;

    // good-id resolves, downloads, and gets described; bad-id has no page zip.
    server
        .mock_async(|when, then| {
            when.method(GET).path("/metadata/good-id");
            then.status(200)
                .json_body(json!({"files": [{"name": "paper_jp2.zip"}]}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/metadata/bad-id");
            then.status(200).json_body(json!({"files": []}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/download/good-id/paper_jp2.zip/paper_jp2%2Fpaper_0000.jp2&ext=jpg");
            then.status(200).body(&[0xFF, 0xD8, 0xFF][..]);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(200).json_body(json!({
                "choices": [{"message": {"content": "HEADLINE: something happened."}}]
            }));
        })
        .await;

    let out = TempDir::new().unwrap();
    let listing = out.path().join("identifiers.txt");
    fs::write(&listing, "good-id\n\n  bad-id  \n").unwrap();

    let chat = ChatClient::with_base_url("k", "gpt-4o", format!("{}/v1", server.base_url()));
    let archive = ArchiveClient::with_base_url(server.base_url());

    let report = run_frontpages(&chat, &archive, &listing, out.path())
        .await
        .unwrap();

    assert_eq!(report.written, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.total(), 2);

    let summary = fs::read_to_string(out.path().join("good-id_summary.txt")).unwrap();
    assert_eq!(summary, "HEADLINE: something happened.");
    assert!(!out.path().join("bad-id_summary.txt").exists());
}

#[tokio::test]
async fn test_missing_identifiers_file_is_fatal() {
    let out = TempDir::new().unwrap();
    let chat = ChatClient::with_base_url("k", "gpt-4o", "http://127.0.0.1:1");
    let archive = ArchiveClient::with_base_url("http://127.0.0.1:1");

    let result = run_frontpages(&chat, &archive, &out.path().join("nope.txt"), out.path()).await;
    assert!(result.is_err());
}
