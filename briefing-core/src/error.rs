use thiserror::Error;

use crate::models::BriefingId;

/// Input rejected before any content is composed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Main keyword is required")]
    EmptyMainKeyword,
}

/// Outcome of a repository command that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Briefing not found: {0}")]
    NotFound(BriefingId),

    #[error("Briefing already exists: {0}")]
    DuplicateId(BriefingId),
}

/// Errors from generating a briefing and storing it in one step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
