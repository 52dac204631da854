use serde::{Deserialize, Serialize};

/// Keyword research for a single landing page.
///
/// Order within each list is significant: the first two variations end up in
/// the keyword summary and the first question may become a section heading.
/// The size hints (10 variations, 10 long-tail keywords, 8 questions) come
/// from the extraction prompt and are not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub main: String,
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default)]
    pub long_tail: Vec<String>,
    #[serde(default)]
    pub questions: Vec<String>,
}

impl KeywordSet {
    pub fn new(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            ..Self::default()
        }
    }

    pub fn with_variations<I, S>(mut self, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variations = variations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_long_tail<I, S>(mut self, long_tail: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.long_tail = long_tail.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_questions<I, S>(mut self, questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.questions = questions.into_iter().map(Into::into).collect();
        self
    }

    /// Build a keyword set from free-text form fields, one keyword per line.
    ///
    /// Blank lines are dropped and the remaining entries are trimmed. The
    /// main keyword is kept as typed; the composer trims it.
    pub fn from_lines(main: &str, variations: &str, long_tail: &str, questions: &str) -> Self {
        Self {
            main: main.to_string(),
            variations: split_lines(variations),
            long_tail: split_lines(long_tail),
            questions: split_lines(questions),
        }
    }

    /// The main keyword without surrounding whitespace.
    pub fn main_trimmed(&self) -> &str {
        self.main.trim()
    }

    /// Total number of keywords including the main keyword.
    pub fn len(&self) -> usize {
        1 + self.variations.len() + self.long_tail.len() + self.questions.len()
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A competitor page (URL or free text) to compare the briefing against.
///
/// Blank input is treated as absent. Generated output never carries an empty
/// value: the composer substitutes a placeholder instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitorReference(Option<String>);

impl CompetitorReference {
    pub fn new(reference: impl Into<String>) -> Self {
        let reference = reference.into();
        if reference.trim().is_empty() {
            Self(None)
        } else {
            Self(Some(reference.trim().to_string()))
        }
    }

    pub fn none() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// The reference itself, or `placeholder` when absent.
    pub fn or_placeholder<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.0.as_deref().unwrap_or(placeholder)
    }
}

impl From<Option<String>> for CompetitorReference {
    fn from(value: Option<String>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

/// Keyword payload as returned by the extraction service.
///
/// Every field is optional on the wire. Only structural presence is checked;
/// keyword quality is taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedKeywords {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_keyword: Option<String>,
    #[serde(default)]
    pub variations: Vec<String>,
    #[serde(default)]
    pub long_tail: Vec<String>,
    #[serde(default)]
    pub questions: Vec<String>,
}

impl ExtractedKeywords {
    /// The main keyword, if the payload carried a non-blank one.
    pub fn main(&self) -> Option<&str> {
        self.main_keyword
            .as_deref()
            .map(str::trim)
            .filter(|main| !main.is_empty())
    }

    /// Convert into a [`KeywordSet`]. Returns `None` without a main keyword.
    pub fn into_keyword_set(self) -> Option<KeywordSet> {
        let main = self.main()?.to_string();
        Some(KeywordSet {
            main,
            variations: self.variations,
            long_tail: self.long_tail,
            questions: self.questions,
        })
    }
}
