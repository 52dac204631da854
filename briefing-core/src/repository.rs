//! In-memory briefing store with a "current" selection.
//!
//! The store lives for the lifetime of the process. Clones of a
//! [`ProjectRepository`] share the same state, and every command runs under
//! a single lock.

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::error::RepositoryError;
use crate::models::{BriefingDocument, BriefingId};

#[derive(Debug, Default)]
struct RepositoryState {
    /// Insertion order, preserved across updates.
    documents: Vec<BriefingDocument>,
    /// Id of the selected briefing. Resolved against `documents` on read.
    current: Option<BriefingId>,
}

impl RepositoryState {
    fn position(&self, id: BriefingId) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id == id)
    }
}

/// Whether [`ProjectRepository::save`] added or replaced a briefing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Replaced,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectRepository {
    state: Arc<Mutex<RepositoryState>>,
}

impl ProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RepositoryState> {
        self.state.lock().expect("repository lock poisoned")
    }

    // ============================================================
    // Commands
    // ============================================================

    /// Append a briefing. The id must not be in use yet.
    pub fn create(&self, document: BriefingDocument) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        if state.position(document.id).is_some() {
            return Err(RepositoryError::DuplicateId(document.id));
        }
        info!(id = %document.id, name = %document.name, "Created briefing");
        state.documents.push(document);
        Ok(())
    }

    /// Replace the briefing with the same id, keeping its position.
    ///
    /// An unknown id is reported as [`RepositoryError::NotFound`] and leaves
    /// the store untouched.
    pub fn update(&self, document: BriefingDocument) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        let index = state
            .position(document.id)
            .ok_or(RepositoryError::NotFound(document.id))?;
        info!(id = %document.id, name = %document.name, "Updated briefing");
        state.documents[index] = document;
        Ok(())
    }

    /// Create or replace in one step.
    pub fn save(&self, document: BriefingDocument) -> SaveOutcome {
        let mut state = self.lock();
        match state.position(document.id) {
            Some(index) => {
                debug!(id = %document.id, "save: replacing");
                state.documents[index] = document;
                SaveOutcome::Replaced
            }
            None => {
                debug!(id = %document.id, "save: appending");
                state.documents.push(document);
                SaveOutcome::Created
            }
        }
    }

    /// Remove a briefing, clearing the selection if it pointed at it.
    pub fn delete(&self, id: BriefingId) -> Result<BriefingDocument, RepositoryError> {
        let mut state = self.lock();
        let index = state.position(id).ok_or(RepositoryError::NotFound(id))?;
        let removed = state.documents.remove(index);
        if state.current == Some(id) {
            state.current = None;
        }
        info!(%id, "Deleted briefing");
        Ok(removed)
    }

    /// Select a briefing. Unknown ids leave the selection unchanged.
    pub fn set_current(&self, id: BriefingId) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        if state.position(id).is_none() {
            return Err(RepositoryError::NotFound(id));
        }
        state.current = Some(id);
        Ok(())
    }

    pub fn clear_current(&self) {
        self.lock().current = None;
    }

    // ============================================================
    // Queries
    // ============================================================

    /// The selected briefing, looked up in the live sequence.
    pub fn current(&self) -> Option<BriefingDocument> {
        let state = self.lock();
        let id = state.current?;
        state.documents.iter().find(|doc| doc.id == id).cloned()
    }

    /// Id of the selected briefing, if it still exists.
    pub fn current_id(&self) -> Option<BriefingId> {
        let state = self.lock();
        state.current.filter(|id| state.position(*id).is_some())
    }

    pub fn get(&self, id: BriefingId) -> Option<BriefingDocument> {
        self.lock().documents.iter().find(|doc| doc.id == id).cloned()
    }

    pub fn contains(&self, id: BriefingId) -> bool {
        self.lock().position(id).is_some()
    }

    /// Snapshot of all briefings in insertion order.
    pub fn list(&self) -> Vec<BriefingDocument> {
        self.lock().documents.clone()
    }

    pub fn len(&self) -> usize {
        self.lock().documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().documents.is_empty()
    }
}
