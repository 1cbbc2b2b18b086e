//! Update draft use case - stores the pending free-text edit on a record.

use std::sync::Arc;

use merchmagic_domain::{Mockup, MockupId};

use super::SuiteError;
use crate::entities::MockupStore;

pub struct UpdateDraft {
    mockups: Arc<MockupStore>,
}

impl UpdateDraft {
    pub fn new(mockups: Arc<MockupStore>) -> Self {
        Self { mockups }
    }

    /// Replace the draft. An empty string clears it.
    pub fn execute(&self, id: MockupId, draft: impl Into<String>) -> Result<Mockup, SuiteError> {
        let draft = draft.into();
        self.mockups
            .update(id, |m| {
                m.set_draft(draft);
                Ok(m.clone())
            })
            .map_err(|e| SuiteError::from_domain(id, e))
    }
}
