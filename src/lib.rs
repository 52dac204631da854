//! SEO briefing generator.
//!
//! Wraps [`briefing_core`] with configuration, the keyword extraction
//! client, the plain-text export and an HTTP API.

pub mod api;
pub mod config;
pub mod export;
pub mod extraction;

pub use briefing_core::{models, BriefingComposer, ProjectRepository};
