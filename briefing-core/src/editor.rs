//! The briefing input form and its states.
//!
//! ```text
//!            field change                 generate() ok
//!   Empty ─────────────────▶ Editing ─────────────────▶ Generated
//!                              ▲  │ generate() error          │
//!                              │  └──────(stays)              │
//!                              └──── load() / reset() / edit ─┘
//! ```
//!
//! There is no terminal state. The editor talks to the composer and the
//! repository but holds no reference to either.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::composer::BriefingComposer;
use crate::error::{GenerateError, RepositoryError};
use crate::models::{BriefingDocument, BriefingId, BriefingInput, ExtractedKeywords, KeywordSet};
use crate::repository::ProjectRepository;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditorState {
    Empty,
    Editing,
    Generated,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    MainKeyword,
    Variations,
    LongTail,
    Questions,
    Competitor,
}

/// Raw form contents. List fields hold one keyword per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingForm {
    pub name: String,
    pub main_keyword: String,
    pub variations: String,
    pub long_tail: String,
    pub questions: String,
    pub competitor: String,
}

impl BriefingForm {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::MainKeyword => &self.main_keyword,
            FormField::Variations => &self.variations,
            FormField::LongTail => &self.long_tail,
            FormField::Questions => &self.questions,
            FormField::Competitor => &self.competitor,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::MainKeyword => &mut self.main_keyword,
            FormField::Variations => &mut self.variations,
            FormField::LongTail => &mut self.long_tail,
            FormField::Questions => &mut self.questions,
            FormField::Competitor => &mut self.competitor,
        }
    }

    pub fn keywords(&self) -> KeywordSet {
        KeywordSet::from_lines(
            &self.main_keyword,
            &self.variations,
            &self.long_tail,
            &self.questions,
        )
    }

    pub fn to_input(&self) -> BriefingInput {
        BriefingInput {
            name: Some(self.name.clone()),
            keywords: self.keywords(),
            competitor: Some(self.competitor.clone()),
        }
    }

    pub fn from_document(doc: &BriefingDocument) -> Self {
        Self {
            name: doc.name.clone(),
            main_keyword: doc.keywords.main.clone(),
            variations: doc.keywords.variations.join("\n"),
            long_tail: doc.keywords.long_tail.join("\n"),
            questions: doc.keywords.questions.join("\n"),
            competitor: doc.competitor.as_deref().unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BriefingEditor {
    form: BriefingForm,
    state: EditorState,
    /// Briefing the form was loaded from or last generated into.
    loaded: Option<BriefingId>,
}

impl Default for BriefingEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl BriefingEditor {
    pub fn new() -> Self {
        Self {
            form: BriefingForm::default(),
            state: EditorState::Empty,
            loaded: None,
        }
    }

    pub fn form(&self) -> &BriefingForm {
        &self.form
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn loaded_id(&self) -> Option<BriefingId> {
        self.loaded
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.form.field_mut(field) = value.into();
        self.state = EditorState::Editing;
    }

    /// Fill the form from an extraction result.
    ///
    /// Only fields the payload actually provides are overwritten. The name
    /// defaults to the main keyword when still empty. Returns whether a main
    /// keyword was found.
    pub fn apply_extraction(&mut self, extracted: &ExtractedKeywords) -> bool {
        let main = extracted.main().map(str::to_string);
        if let Some(main) = &main {
            self.set_field(FormField::MainKeyword, main.clone());
            if self.form.name.is_empty() {
                self.set_field(FormField::Name, main.clone());
            }
        }
        if !extracted.variations.is_empty() {
            self.set_field(FormField::Variations, extracted.variations.join("\n"));
        }
        if !extracted.long_tail.is_empty() {
            self.set_field(FormField::LongTail, extracted.long_tail.join("\n"));
        }
        if !extracted.questions.is_empty() {
            self.set_field(FormField::Questions, extracted.questions.join("\n"));
        }
        debug!(found_main = main.is_some(), "apply_extraction: done");
        main.is_some()
    }

    /// Compose the form into a briefing and store it.
    ///
    /// A briefing loaded into the editor is regenerated in place (same id,
    /// same creation time). Otherwise a new briefing is created. Either way
    /// it becomes the repository's current selection. On a validation error
    /// nothing is stored and the state is left as it was.
    pub fn generate(
        &mut self,
        composer: &BriefingComposer,
        repository: &ProjectRepository,
    ) -> Result<BriefingDocument, GenerateError> {
        let existing = self.loaded.and_then(|id| repository.get(id));
        let (id, created_at) = match &existing {
            Some(doc) => (doc.id, doc.created_at),
            None => (Uuid::new_v4(), Utc::now()),
        };

        let document = composer.build_document(id, &self.form.to_input(), created_at)?;

        if existing.is_some() {
            repository.update(document.clone())?;
        } else {
            repository.create(document.clone())?;
        }
        repository.set_current(id)?;

        info!(%id, name = %document.name, "Generated briefing");
        self.loaded = Some(id);
        self.state = EditorState::Generated;
        Ok(document)
    }

    /// Load a stored briefing into the form and select it.
    pub fn load(
        &mut self,
        id: BriefingId,
        repository: &ProjectRepository,
    ) -> Result<(), RepositoryError> {
        let document = repository.get(id).ok_or(RepositoryError::NotFound(id))?;
        repository.set_current(id)?;
        self.form = BriefingForm::from_document(&document);
        self.loaded = Some(id);
        self.state = EditorState::Editing;
        Ok(())
    }

    /// Clear the form and the repository selection.
    pub fn reset(&mut self, repository: &ProjectRepository) {
        self.form = BriefingForm::default();
        self.loaded = None;
        repository.clear_current();
        if self.state != EditorState::Empty {
            self.state = EditorState::Editing;
        }
    }
}
