//! Suite use cases - batch generation, retry and draft editing.

mod draft;
mod generate;
mod retry;

use std::sync::Arc;

use merchmagic_domain::{DomainError, MockupId, MockupStatus};

pub use draft::UpdateDraft;
pub use generate::{BatchRun, BatchSummary, GenerateSuite};
pub use retry::{RetryMockup, RetryOutcome};

/// Container for suite use cases.
pub struct SuiteUseCases {
    pub generate: Arc<GenerateSuite>,
    pub retry: Arc<RetryMockup>,
    pub draft: Arc<UpdateDraft>,
}

impl SuiteUseCases {
    pub fn new(
        generate: Arc<GenerateSuite>,
        retry: Arc<RetryMockup>,
        draft: Arc<UpdateDraft>,
    ) -> Self {
        Self {
            generate,
            retry,
            draft,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SuiteError {
    #[error("No logo has been uploaded")]
    NoLogo,
    #[error("Mockup not found: {0}")]
    NotFound(MockupId),
    #[error("Mockup {id} cannot be retried while {status}")]
    NotRetryable { id: MockupId, status: MockupStatus },
    #[error(transparent)]
    Domain(DomainError),
}

impl SuiteError {
    fn from_domain(id: MockupId, error: DomainError) -> Self {
        match error {
            DomainError::NotFound { .. } => Self::NotFound(id),
            DomainError::InvalidStateTransition { from, .. } => {
                Self::NotRetryable { id, status: from }
            }
            other => Self::Domain(other),
        }
    }
}
