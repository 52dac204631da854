//! Domain models for the briefing generator.
//!
//! - [`KeywordSet`]: the keyword research a briefing is built from.
//! - [`CompetitorReference`]: optional competitor URL or free text.
//! - [`GeneratedContent`]: the composed page outline (meta tags, H1, sections).
//! - [`BriefingDocument`]: one stored briefing, identified by a caller-assigned id.
//! - [`ExtractedKeywords`]: raw keyword payload as returned by the extraction service.

mod briefing;
mod content;
mod keywords;

pub use briefing::*;
pub use content::*;
pub use keywords::*;
