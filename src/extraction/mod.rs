//! Keyword extraction from uploaded keyword-research reports.
//!
//! The extraction service reads a PDF report and answers with a JSON keyword
//! payload. There is no retry policy here: callers decide whether to try
//! again.

mod anthropic;
mod error;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use briefing_core::models::ExtractedKeywords;

pub use anthropic::{AnthropicExtractor, EXTRACTION_PROMPT};
pub use error::{ExtractionError, RAW_TEXT_LIMIT};

/// Turns a base64-encoded PDF into a keyword payload.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, pdf_base64: &str) -> Result<ExtractedKeywords, ExtractionError>;
}

/// Base64-encode a document for upload.
pub fn encode_document(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Parse the model's answer, tolerating markdown code fences around the JSON.
pub fn parse_keyword_payload(text: &str) -> Result<ExtractedKeywords, ExtractionError> {
    let cleaned = strip_fence(&strip_fence(text, "```json"), "```");
    serde_json::from_str(cleaned.trim()).map_err(|e| {
        tracing::warn!("Extraction payload is not valid JSON: {}", e);
        ExtractionError::malformed(text)
    })
}

/// Remove every `fence`, together with a directly following newline.
fn strip_fence(text: &str, fence: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(fence) {
        out.push_str(&rest[..start]);
        rest = &rest[start + fence.len()..];
        rest = rest.strip_prefix('\n').unwrap_or(rest);
    }
    out.push_str(rest);
    out
}
