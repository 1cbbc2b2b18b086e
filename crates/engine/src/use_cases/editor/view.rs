//! Local view controls for an open editor. Nothing here reaches the image service.

use std::sync::Arc;

use merchmagic_domain::{FilterPreset, MockupId};
use serde::Deserialize;

use super::sessions::{EditorSessions, EditorState};
use super::EditError;
use crate::entities::MockupStore;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ViewAction {
    ZoomIn,
    ZoomOut,
    Pan { x: f32, y: f32 },
    ToggleFlip,
    SetFilter { filter: FilterPreset },
    Reset,
}

pub struct EditorView {
    mockups: Arc<MockupStore>,
    sessions: Arc<EditorSessions>,
}

impl EditorView {
    pub fn new(mockups: Arc<MockupStore>, sessions: Arc<EditorSessions>) -> Self {
        Self { mockups, sessions }
    }

    pub fn state(&self, id: MockupId) -> Result<EditorState, EditError> {
        self.ensure_exists(id)?;
        Ok(self.sessions.state(id))
    }

    pub fn apply(&self, id: MockupId, action: ViewAction) -> Result<EditorState, EditError> {
        self.ensure_exists(id)?;
        let state = self.sessions.modify(id, |state| {
            let view = &mut state.view;
            match action {
                ViewAction::ZoomIn => view.zoom_in(),
                ViewAction::ZoomOut => view.zoom_out(),
                ViewAction::Pan { x, y } => {
                    // Panning at base zoom is silently ignored
                    view.pan_to(x, y);
                }
                ViewAction::ToggleFlip => view.toggle_flip(),
                ViewAction::SetFilter { filter } => view.set_filter(filter),
                ViewAction::Reset => view.reset(),
            }
            state.clone()
        });
        tracing::trace!(mockup_id = %id, ?action, "View updated");
        Ok(state)
    }

    /// Clear the inline error banner.
    pub fn dismiss_error(&self, id: MockupId) -> Result<EditorState, EditError> {
        self.ensure_exists(id)?;
        self.sessions.set_error(id, None);
        Ok(self.sessions.state(id))
    }

    fn ensure_exists(&self, id: MockupId) -> Result<(), EditError> {
        match self.mockups.get(id) {
            Some(_) => Ok(()),
            None => Err(EditError::NotFound(id)),
        }
    }
}
