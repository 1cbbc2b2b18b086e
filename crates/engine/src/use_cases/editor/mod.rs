//! Editor use cases - AI edits on a ready record and local view controls.

mod edit;
mod sessions;
mod view;

use std::sync::Arc;

use merchmagic_domain::{DomainError, MockupId, MockupStatus};

pub use edit::{EditMockup, EditOutcome, EditSource};
pub use sessions::{BusyGuard, EditFailure, EditorSessions, EditorState};
pub use view::{EditorView, ViewAction};

/// Container for editor use cases.
pub struct EditorUseCases {
    pub edit: Arc<EditMockup>,
    pub view: Arc<EditorView>,
}

impl EditorUseCases {
    pub fn new(edit: Arc<EditMockup>, view: Arc<EditorView>) -> Self {
        Self { edit, view }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Mockup not found: {0}")]
    NotFound(MockupId),
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
    #[error("An edit is already in progress for this mockup")]
    Busy,
    #[error("Mockup cannot be edited while {0}")]
    NotReady(MockupStatus),
    #[error("{0}")]
    Failed(EditFailure),
    #[error(transparent)]
    Domain(DomainError),
}

impl EditError {
    fn from_domain(id: MockupId, error: DomainError) -> Self {
        match error {
            DomainError::NotFound { .. } => Self::NotFound(id),
            DomainError::InvalidStateTransition { from, .. } => Self::NotReady(from),
            other => Self::Domain(other),
        }
    }
}
