//! Edit mockup use case - sends one ready record's image back for an edit.

use std::sync::Arc;

use merchmagic_domain::{
    find_preset, ImageData, Mockup, MockupId, MockupStatus, CUSTOM_BACKGROUND_INSTRUCTION,
};

use super::sessions::{EditFailure, EditorSessions};
use super::EditError;
use crate::entities::MockupStore;
use crate::infrastructure::ports::{ImageGenPort, ImageRequest};

/// Where the edit instruction comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSource {
    /// The record's own draft text. Clears the draft on success.
    FreeText,
    /// A preset looked up by id.
    Preset(String),
    /// An uploaded background image, sent as a reference.
    CustomBackground(ImageData),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// Nothing to send: the instruction was empty.
    Skipped,
    Applied(Mockup),
}

struct ResolvedEdit {
    instruction: String,
    reference: Option<ImageData>,
    clears_draft: bool,
}

pub struct EditMockup {
    mockups: Arc<MockupStore>,
    sessions: Arc<EditorSessions>,
    image_gen: Arc<dyn ImageGenPort>,
}

impl EditMockup {
    pub fn new(
        mockups: Arc<MockupStore>,
        sessions: Arc<EditorSessions>,
        image_gen: Arc<dyn ImageGenPort>,
    ) -> Self {
        Self {
            mockups,
            sessions,
            image_gen,
        }
    }

    /// Edit a ready record in place.
    ///
    /// On failure the record is left exactly as it was and the failure is kept
    /// on the editor session until dismissed. The record's status never changes.
    pub async fn execute(&self, id: MockupId, source: EditSource) -> Result<EditOutcome, EditError> {
        if self.mockups.get(id).is_none() {
            return Err(EditError::NotFound(id));
        }

        // Read under the busy flag: each edit starts from the latest image.
        let Some(_busy) = self.sessions.try_begin(id) else {
            return Err(EditError::Busy);
        };
        let mockup = self.mockups.get(id).ok_or(EditError::NotFound(id))?;
        let edit = resolve(&mockup, source)?;
        if edit.instruction.trim().is_empty() {
            return Ok(EditOutcome::Skipped);
        }
        if mockup.status() != MockupStatus::Ready {
            return Err(EditError::NotReady(mockup.status()));
        }
        let image = mockup.image().ok_or(EditError::NotReady(mockup.status()))?;

        tracing::info!(
            mockup_id = %id,
            product = %mockup.product,
            has_reference = edit.reference.is_some(),
            "Editing mockup"
        );

        let mut request = ImageRequest::new(image, edit.instruction);
        if let Some(reference) = edit.reference {
            request = request.with_reference(reference);
        }

        match self.image_gen.generate(request).await {
            Ok(result) => {
                let updated = self
                    .mockups
                    .update(id, |m| {
                        m.apply_edit(&result.image, edit.clears_draft)?;
                        Ok(m.clone())
                    })
                    .map_err(|e| EditError::from_domain(id, e))?;
                self.sessions.modify(id, |state| {
                    state.view.reset();
                    state.last_error = None;
                });
                tracing::debug!(mockup_id = %id, "Edit applied");
                Ok(EditOutcome::Applied(updated))
            }
            Err(e) => {
                let e = e.for_edit();
                tracing::warn!(
                    mockup_id = %id,
                    safety = e.is_safety(),
                    error = %e,
                    "Mockup edit failed"
                );
                let failure = EditFailure::from(&e);
                self.sessions.set_error(id, Some(failure.clone()));
                Err(EditError::Failed(failure))
            }
        }
    }
}

fn resolve(mockup: &Mockup, source: EditSource) -> Result<ResolvedEdit, EditError> {
    match source {
        EditSource::FreeText => Ok(ResolvedEdit {
            instruction: mockup.draft_instruction().unwrap_or_default().to_string(),
            reference: None,
            clears_draft: true,
        }),
        EditSource::Preset(preset_id) => {
            let preset = find_preset(&preset_id).ok_or(EditError::UnknownPreset(preset_id))?;
            Ok(ResolvedEdit {
                instruction: preset.instruction.to_string(),
                reference: None,
                clears_draft: false,
            })
        }
        EditSource::CustomBackground(background) => Ok(ResolvedEdit {
            instruction: CUSTOM_BACKGROUND_INSTRUCTION.to_string(),
            reference: Some(background),
            clears_draft: false,
        }),
    }
}
