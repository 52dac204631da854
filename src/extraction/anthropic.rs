//! Keyword extraction through the Anthropic Messages API.

use std::time::Duration;

use async_trait::async_trait;
use briefing_core::models::ExtractedKeywords;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{parse_keyword_payload, ExtractionError, KeywordExtractor};
use crate::config::ExtractionConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Instructions sent alongside the PDF.
pub const EXTRACTION_PROMPT: &str = r#"Analyseer dit SEMrush rapport en extraheer de volgende informatie voor SEO doeleinden:

1. HOOFDZOEKWOORD: Het primaire/meest relevante zoekwoord (1 zoekwoord)
2. ZOEKWOORDVARIATIES: Meervoud, synoniemen, spellingvarianten (max 10)
3. LONG-TAIL ZOEKWOORDEN: Langere specifieke zoekwoorden (max 10)
4. VRAGEN: "People Also Ask" vragen of vraagvormen (max 8)

FILTER UIT: Zoekwoorden met merknamen van concurrenten.

Geef je antwoord ALLEEN in dit exacte JSON formaat, zonder extra tekst of markdown:
{
  "mainKeyword": "string",
  "variations": ["string"],
  "longTail": ["string"],
  "questions": ["string"]
}"#;

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Extraction client for the Anthropic Messages API.
#[derive(Debug, Clone)]
pub struct AnthropicExtractor {
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    http: Client,
}

impl AnthropicExtractor {
    /// Create from configuration. Fails when the API key variable is unset.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        let api_key = config.api_key().ok_or_else(|| {
            ExtractionError::NotConfigured(format!("{} is not set", config.api_key_env))
        })?;
        Self::new(config, api_key)
    }

    /// Create with an explicit API key.
    pub fn new(config: &ExtractionConfig, api_key: impl Into<String>) -> Result<Self, ExtractionError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            http,
        })
    }

    fn build_request_body(&self, pdf_base64: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "document",
                            "source": {
                                "type": "base64",
                                "media_type": "application/pdf",
                                "data": pdf_base64,
                            }
                        },
                        {
                            "type": "text",
                            "text": EXTRACTION_PROMPT,
                        }
                    ]
                }
            ]
        })
    }
}

#[async_trait]
impl KeywordExtractor for AnthropicExtractor {
    async fn extract(&self, pdf_base64: &str) -> Result<ExtractedKeywords, ExtractionError> {
        let url = format!("{}/v1/messages", self.base_url);
        info!(model = %self.model, "Requesting keyword extraction");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.build_request_body(pdf_base64))
            .send()
            .await?;

        let status = response.status();
        debug!(%status, "extract: response received");
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Extraction request failed: {}", body);
            return Err(ExtractionError::upstream(status.as_u16(), &body));
        }

        let body = response.text().await?;
        let message: MessagesResponse =
            serde_json::from_str(&body).map_err(|_| ExtractionError::malformed(&body))?;

        let text = message
            .content
            .into_iter()
            .filter_map(|block| match block {
                ResponseBlock::Text { text } => Some(text),
                ResponseBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        parse_keyword_payload(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> AnthropicExtractor {
        AnthropicExtractor::new(&ExtractionConfig::default(), "test-key").unwrap()
    }

    #[test]
    fn request_body_carries_document_and_prompt() {
        let body = extractor().build_request_body("JVBERi0xLjc=");

        assert_eq!(body["model"], "claude-sonnet-4-20250514");
        assert_eq!(body["max_tokens"], 2000);
        let content = &body["messages"][0]["content"];
        assert_eq!(content[0]["type"], "document");
        assert_eq!(content[0]["source"]["media_type"], "application/pdf");
        assert_eq!(content[0]["source"]["data"], "JVBERi0xLjc=");
        assert_eq!(content[1]["text"], EXTRACTION_PROMPT);
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = ExtractionConfig {
            base_url: "http://localhost:9999/".to_string(),
            ..ExtractionConfig::default()
        };
        let extractor = AnthropicExtractor::new(&config, "k").unwrap();
        assert_eq!(extractor.base_url, "http://localhost:9999");
    }

    #[test]
    fn non_text_blocks_are_ignored() {
        let message: MessagesResponse = serde_json::from_str(
            r#"{"content":[{"type":"thinking","thinking":"..."},{"type":"text","text":"{}"}]}"#,
        )
        .unwrap();
        assert_eq!(message.content.len(), 2);
        assert!(matches!(message.content[0], ResponseBlock::Other));
    }
}
