use serde::{Deserialize, Serialize};

/// Search intent a section is written for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SectionIntent {
    Commercial,
    Informational,
}

impl SectionIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Informational => "informational",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "commercial" => Some(Self::Commercial),
            "informational" => Some(Self::Informational),
            _ => None,
        }
    }

    /// Label shown to copywriters in previews and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commercial => "Commercieel",
            Self::Informational => "Informatief",
        }
    }
}

/// One H2 block of the briefing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub intent: SectionIntent,
    /// Guidance for the copywriter. Never published on the page.
    pub note: String,
    /// Draft text; paragraphs are separated by a blank line.
    pub body: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl Section {
    /// Body split on blank lines.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body.split("\n\n")
    }
}

/// Page title and meta description for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTags {
    pub page_title: String,
    pub meta_description: String,
}

/// Output of the composer.
///
/// `sections` is always commercial, informational (static), informational
/// (question driven), in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub landing_page: String,
    pub competitor_ref: String,
    pub h1: String,
    pub keyword_summary: String,
    pub word_count_target: String,
    pub sections: [Section; 3],
    pub meta: MetaTags,
}

impl GeneratedContent {
    pub fn commercial(&self) -> &Section {
        &self.sections[0]
    }

    pub fn informational(&self) -> &Section {
        &self.sections[1]
    }

    pub fn how_to(&self) -> &Section {
        &self.sections[2]
    }
}
