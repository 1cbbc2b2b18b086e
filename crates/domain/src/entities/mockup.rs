//! Mockup entity - One product's generation and edit lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::ids::MockupId;
use crate::value_objects::{ImageData, ProductTemplate, ProductType};

/// Status of a mockup render
///
/// Per attempt the status moves `Queued -> Generating -> (Ready | Error)`.
/// `Error -> Generating` is a retry; `Ready -> Generating` re-renders in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockupStatus {
    /// Waiting in the batch queue
    Queued,
    /// A request to the image service is outstanding
    Generating,
    /// Has a rendered image
    Ready,
    /// The last attempt failed
    Error,
}

impl MockupStatus {
    /// Whether the record counts toward batch progress.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Ready | Self::Error)
    }

    pub fn can_start_generating(&self) -> bool {
        match self {
            Self::Queued | Self::Error | Self::Ready => true,
            Self::Generating => false,
        }
    }
}

impl fmt::Display for MockupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queued => write!(f, "queued"),
            Self::Generating => write!(f, "generating"),
            Self::Ready => write!(f, "ready"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single product render tracked through a batch and the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mockup {
    pub id: MockupId,
    pub product: ProductType,
    /// Current render as a data URI. Empty until the first success.
    image_url: String,
    /// Instruction used for the initial render and for retries.
    original_instruction: String,
    status: MockupStatus,
    /// Pending free-text edit, not yet submitted.
    draft_instruction: Option<String>,
}

impl Mockup {
    /// Create a queued record for a catalog template.
    pub fn queued(template: &ProductTemplate) -> Self {
        Self {
            id: MockupId::new(),
            product: template.product,
            image_url: String::new(),
            original_instruction: template.instruction.clone(),
            status: MockupStatus::Queued,
            draft_instruction: None,
        }
    }

    pub fn status(&self) -> MockupStatus {
        self.status
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// The current render, if any.
    pub fn image(&self) -> Option<ImageData> {
        if self.image_url.is_empty() {
            return None;
        }
        ImageData::from_data_uri(&self.image_url).ok()
    }

    pub fn original_instruction(&self) -> &str {
        &self.original_instruction
    }

    pub fn draft_instruction(&self) -> Option<&str> {
        self.draft_instruction.as_deref()
    }

    /// Mark a request as outstanding.
    pub fn start_generating(&mut self) -> Result<(), DomainError> {
        if !self.status.can_start_generating() {
            return Err(DomainError::invalid_transition(self.status, "start generating"));
        }
        self.status = MockupStatus::Generating;
        Ok(())
    }

    /// Record a successful render.
    pub fn complete(&mut self, image: &ImageData) -> Result<(), DomainError> {
        if self.status != MockupStatus::Generating {
            return Err(DomainError::invalid_transition(self.status, "complete"));
        }
        self.image_url = image.to_data_uri();
        self.status = MockupStatus::Ready;
        Ok(())
    }

    /// Record a failed render. Any previous image is kept.
    pub fn fail(&mut self) -> Result<(), DomainError> {
        if self.status != MockupStatus::Generating {
            return Err(DomainError::invalid_transition(self.status, "fail"));
        }
        self.status = MockupStatus::Error;
        Ok(())
    }

    /// Replace the image of a ready record with an edited render.
    ///
    /// `clears_draft` is set when the edit was submitted from the free-text draft.
    pub fn apply_edit(&mut self, image: &ImageData, clears_draft: bool) -> Result<(), DomainError> {
        if self.status != MockupStatus::Ready {
            return Err(DomainError::invalid_transition(self.status, "apply edit"));
        }
        self.image_url = image.to_data_uri();
        if clears_draft {
            self.draft_instruction = None;
        }
        Ok(())
    }

    /// Store the pending free-text edit. Blank text clears it.
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        let draft = draft.into();
        self.draft_instruction = if draft.is_empty() { None } else { Some(draft) };
    }

    pub fn clear_draft(&mut self) {
        self.draft_instruction = None;
    }
}
