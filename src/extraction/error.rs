use thiserror::Error;

/// Longest prefix of an unparsable upstream answer kept for diagnostics.
pub const RAW_TEXT_LIMIT: usize = 500;

/// Errors from the keyword extraction service.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Extraction service not configured: {0}")]
    NotConfigured(String),

    #[error("Upstream service returned {status}")]
    Upstream {
        status: u16,
        /// Structured error body, or `{"message": <text>}` when not JSON.
        details: serde_json::Value,
    },

    #[error("Failed to parse extraction response")]
    Malformed {
        /// At most [`RAW_TEXT_LIMIT`] characters of the offending text.
        raw: String,
    },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl ExtractionError {
    pub fn malformed(raw: &str) -> Self {
        Self::Malformed {
            raw: raw.chars().take(RAW_TEXT_LIMIT).collect(),
        }
    }

    /// Build an upstream error from a status and raw body text.
    pub fn upstream(status: u16, body: &str) -> Self {
        let details = serde_json::from_str(body)
            .unwrap_or_else(|_| serde_json::json!({ "message": body }));
        Self::Upstream { status, details }
    }
}
