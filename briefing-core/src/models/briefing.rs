use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::GeneratedContent;
use super::keywords::{CompetitorReference, KeywordSet};

/// Identifier of a briefing. Assigned by the caller, never by the repository.
pub type BriefingId = Uuid;

/// A generated SEO briefing for one landing page.
///
/// Regenerating a briefing keeps its `id` and `created_at` and replaces the
/// keywords, competitor and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingDocument {
    pub id: BriefingId,
    /// Display label. Defaults to the main keyword.
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub keywords: KeywordSet,
    pub competitor: CompetitorReference,
    pub content: GeneratedContent,
}

impl BriefingDocument {
    /// Creation time in local time, formatted the Dutch way (`19-10-2026, 14:03:05`).
    pub fn created_at_label(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%-d-%-m-%Y, %H:%M:%S")
            .to_string()
    }
}

/// Input for creating or regenerating a briefing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefingInput {
    /// Display label. Falls back to the main keyword when absent or blank.
    pub name: Option<String>,
    pub keywords: KeywordSet,
    #[serde(default)]
    pub competitor: Option<String>,
}

impl BriefingInput {
    pub fn new(keywords: KeywordSet) -> Self {
        Self {
            name: None,
            keywords,
            competitor: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_competitor(mut self, competitor: impl Into<String>) -> Self {
        self.competitor = Some(competitor.into());
        self
    }

    /// The display name this input resolves to.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.keywords.main_trimmed().to_string(),
        }
    }

    pub fn competitor_reference(&self) -> CompetitorReference {
        self.competitor.clone().into()
    }
}

/// Summary used for briefing lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingSummary {
    pub id: BriefingId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub main_keyword: String,
}

impl From<&BriefingDocument> for BriefingSummary {
    fn from(doc: &BriefingDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name.clone(),
            created_at: doc.created_at,
            main_keyword: doc.keywords.main.clone(),
        }
    }
}

impl From<BriefingDocument> for BriefingSummary {
    fn from(doc: BriefingDocument) -> Self {
        Self::from(&doc)
    }
}
