//! Turns keyword research into briefing content.
//!
//! [`BriefingComposer::compose`] is a pure function of its inputs: the same
//! keyword set and competitor always yield the same [`GeneratedContent`].

use tracing::debug;

use crate::error::ValidationError;
use crate::models::{
    BriefingDocument, BriefingId, BriefingInput, CompetitorReference, GeneratedContent,
    KeywordSet, MetaTags, Section, SectionIntent,
};
use crate::plural::{PluralRule, SuffixPluralRule};
use crate::templates::{Substitutions, TemplateKey, TemplateSet};

/// Markers that promote the first question to the how-to heading.
///
/// A single-word marker matches anywhere in the question. A marker of
/// several words matches when each appears as a whole word, in order, so
/// the separable verb in "Hoe breng je ... aan?" is caught while
/// "opbrengst" is not.
pub const DEFAULT_HEADING_MARKERS: [&str; 2] = ["aanbrengen", "breng aan"];

/// Keywords from the variation list that make it into the keyword summary.
const SUMMARY_VARIATIONS: usize = 2;

#[derive(Debug)]
pub struct BriefingComposer {
    templates: TemplateSet,
    plural_rule: Box<dyn PluralRule>,
    heading_markers: Vec<String>,
}

impl Default for BriefingComposer {
    fn default() -> Self {
        Self::new(TemplateSet::default(), SuffixPluralRule::default())
    }
}

impl BriefingComposer {
    pub fn new(templates: TemplateSet, plural_rule: impl PluralRule + 'static) -> Self {
        Self {
            templates,
            plural_rule: Box::new(plural_rule),
            heading_markers: DEFAULT_HEADING_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }

    /// Replace the heading markers. Matching is case-insensitive.
    pub fn with_heading_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.heading_markers = markers
            .into_iter()
            .map(|m| m.into().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        self
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Plural form of `keyword` under the active rule.
    pub fn pluralize(&self, keyword: &str) -> String {
        self.plural_rule.pluralize(keyword)
    }

    /// Compose the briefing content for a keyword set.
    pub fn compose(
        &self,
        keywords: &KeywordSet,
        competitor: &CompetitorReference,
    ) -> Result<GeneratedContent, ValidationError> {
        let main = keywords.main_trimmed();
        if main.is_empty() {
            return Err(ValidationError::EmptyMainKeyword);
        }

        let plural = self.plural_rule.pluralize(main);
        let h1 = capitalize_first(main);
        let plural_title = capitalize_first(&plural);
        let subs = Substitutions {
            main,
            h1: &h1,
            plural: &plural,
            plural_title: &plural_title,
        };
        debug!(%main, %plural, "compose: called");

        let sections = [
            Section {
                heading: self.templates.render(TemplateKey::CommercialHeading, &subs),
                intent: SectionIntent::Commercial,
                note: self.templates.render(TemplateKey::CommercialNote, &subs),
                body: self.templates.render(TemplateKey::CommercialBody, &subs),
                bullets: self.templates.benefits().to_vec(),
            },
            Section {
                heading: self.templates.render(TemplateKey::InformationalHeading, &subs),
                intent: SectionIntent::Informational,
                note: self.templates.render(TemplateKey::InformationalNote, &subs),
                body: self.templates.render(TemplateKey::InformationalBody, &subs),
                bullets: Vec::new(),
            },
            Section {
                heading: self.how_to_heading(keywords, &subs),
                intent: SectionIntent::Informational,
                note: self.templates.render(TemplateKey::HowToNote, &subs),
                body: self.templates.render(TemplateKey::HowToBody, &subs),
                bullets: Vec::new(),
            },
        ];

        Ok(GeneratedContent {
            landing_page: main.to_string(),
            competitor_ref: competitor
                .or_placeholder(self.templates.get(TemplateKey::CompetitorPlaceholder))
                .to_string(),
            h1: h1.clone(),
            keyword_summary: keyword_summary(main, &keywords.variations),
            word_count_target: self.templates.render(TemplateKey::WordCountTarget, &subs),
            sections,
            meta: MetaTags {
                page_title: self.templates.render(TemplateKey::PageTitle, &subs),
                meta_description: self.templates.render(TemplateKey::MetaDescription, &subs),
            },
        })
    }

    /// Compose `input` into a full document with the given identity.
    pub fn build_document(
        &self,
        id: BriefingId,
        input: &BriefingInput,
        created_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<BriefingDocument, ValidationError> {
        let competitor = input.competitor_reference();
        let content = self.compose(&input.keywords, &competitor)?;
        Ok(BriefingDocument {
            id,
            name: input.display_name(),
            created_at,
            keywords: input.keywords.clone(),
            competitor,
            content,
        })
    }

    /// The first question when it mentions applying the product, otherwise
    /// the templated default.
    fn how_to_heading(&self, keywords: &KeywordSet, subs: &Substitutions<'_>) -> String {
        if let Some(question) = keywords.questions.first() {
            let lowered = question.to_lowercase();
            if self
                .heading_markers
                .iter()
                .any(|marker| marker_matches(&lowered, marker))
            {
                debug!(%question, "how_to_heading: using first question");
                return question.clone();
            }
        }
        self.templates.render(TemplateKey::HowToHeading, subs)
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `question` and `marker` are both lowercase.
fn marker_matches(question: &str, marker: &str) -> bool {
    let parts: Vec<&str> = marker.split_whitespace().collect();
    match parts.as_slice() {
        [] => false,
        [single] => question.contains(*single),
        _ => {
            let mut words = question
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty());
            parts.iter().all(|part| words.any(|word| word == *part))
        }
    }
}

fn keyword_summary(main: &str, variations: &[String]) -> String {
    std::iter::once(main)
        .chain(
            variations
                .iter()
                .take(SUMMARY_VARIATIONS)
                .map(String::as_str),
        )
        .collect::<Vec<_>>()
        .join(", ")
}
