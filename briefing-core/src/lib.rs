//! Core of the SEO briefing generator.
//!
//! Everything in this crate is free of I/O: the [`composer`] turns a
//! [`models::KeywordSet`] into generated briefing content, the
//! [`repository`] keeps briefings in memory with a "current" selection, and
//! the [`editor`] models the input form that drives both.

pub mod composer;
pub mod editor;
pub mod error;
pub mod models;
pub mod plural;
pub mod repository;
pub mod templates;

pub use composer::BriefingComposer;
pub use editor::{BriefingEditor, BriefingForm, EditorState, FormField};
pub use error::{GenerateError, RepositoryError, ValidationError};
pub use plural::{PluralRule, SuffixPluralRule};
pub use repository::{ProjectRepository, SaveOutcome};
pub use templates::{TemplateKey, TemplateSet};
