//! Per-record editor state: busy flag, local view, last inline error.

use std::collections::HashMap;
use std::sync::RwLock;

use merchmagic_domain::{MockupId, ViewTransform};
use serde::Serialize;

use crate::infrastructure::ports::ImageGenError;

/// Inline error shown under the editor until dismissed or the next success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditFailure {
    pub message: String,
    pub details: Option<String>,
    pub is_safety: bool,
    pub safety_categories: Vec<String>,
}

impl From<&ImageGenError> for EditFailure {
    fn from(error: &ImageGenError) -> Self {
        Self {
            message: error.to_string(),
            details: error.details(),
            is_safety: error.is_safety(),
            safety_categories: error.safety_categories().to_vec(),
        }
    }
}

impl std::fmt::Display for EditFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EditorState {
    pub busy: bool,
    pub view: ViewTransform,
    pub last_error: Option<EditFailure>,
}

/// Editor state for every record that has been opened.
#[derive(Default)]
pub struct EditorSessions {
    states: RwLock<HashMap<MockupId, EditorState>>,
}

impl EditorSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, defaulted for records never opened.
    pub fn state(&self, id: MockupId) -> EditorState {
        self.states
            .read()
            .ok()
            .and_then(|states| states.get(&id).cloned())
            .unwrap_or_default()
    }

    pub fn view(&self, id: MockupId) -> ViewTransform {
        self.state(id).view
    }

    /// Mutate one record's state and return the result.
    pub fn modify<T>(&self, id: MockupId, f: impl FnOnce(&mut EditorState) -> T) -> T {
        match self.states.write() {
            Ok(mut states) => f(states.entry(id).or_default()),
            Err(poisoned) => f(poisoned.into_inner().entry(id).or_default()),
        }
    }

    /// Mark the record busy. `None` if an edit is already in flight.
    pub fn try_begin(&self, id: MockupId) -> Option<BusyGuard<'_>> {
        let acquired = self.modify(id, |state| {
            if state.busy {
                false
            } else {
                state.busy = true;
                true
            }
        });
        acquired.then_some(BusyGuard { sessions: self, id })
    }

    pub fn set_error(&self, id: MockupId, error: Option<EditFailure>) {
        self.modify(id, |state| state.last_error = error);
    }

    /// Drop state for records that are no longer in the table.
    pub fn retain(&self, keep: impl Fn(MockupId) -> bool) {
        if let Ok(mut states) = self.states.write() {
            states.retain(|id, _| keep(*id));
        }
    }
}

/// Clears the busy flag when the edit ends, however it ends.
pub struct BusyGuard<'a> {
    sessions: &'a EditorSessions,
    id: MockupId,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.sessions.modify(self.id, |state| state.busy = false);
    }
}
