//! Retry mockup use case - re-runs one failed record outside the batch pool.

use std::sync::Arc;

use merchmagic_domain::{DomainError, Mockup, MockupId, MockupStatus};

use super::SuiteError;
use crate::entities::{LogoSlot, MockupStore};
use crate::infrastructure::ports::{ImageGenError, ImageGenPort, ImageRequest};

/// Result of a retry: the record afterwards, and the failure if it failed again.
#[derive(Debug)]
pub struct RetryOutcome {
    pub mockup: Mockup,
    pub error: Option<ImageGenError>,
}

pub struct RetryMockup {
    mockups: Arc<MockupStore>,
    logo: Arc<LogoSlot>,
    image_gen: Arc<dyn ImageGenPort>,
}

impl RetryMockup {
    pub fn new(
        mockups: Arc<MockupStore>,
        logo: Arc<LogoSlot>,
        image_gen: Arc<dyn ImageGenPort>,
    ) -> Self {
        Self {
            mockups,
            logo,
            image_gen,
        }
    }

    /// Retry a record in `error` status with its original instruction.
    pub async fn execute(&self, id: MockupId) -> Result<RetryOutcome, SuiteError> {
        let logo = self.logo.get().ok_or(SuiteError::NoLogo)?;

        let mockup = self
            .mockups
            .update(id, |m| {
                if m.status() != MockupStatus::Error {
                    return Err(DomainError::invalid_transition(m.status(), "retry"));
                }
                m.start_generating()?;
                Ok(m.clone())
            })
            .map_err(|e| SuiteError::from_domain(id, e))?;

        tracing::info!(mockup_id = %id, product = %mockup.product, "Retrying mockup");

        let request = ImageRequest::new(logo, mockup.original_instruction());
        let (updated, error) = match self.image_gen.generate(request).await {
            Ok(result) => {
                let updated = self.mockups.update(id, |m| {
                    m.complete(&result.image)?;
                    Ok(m.clone())
                });
                (updated, None)
            }
            Err(e) => {
                tracing::warn!(mockup_id = %id, safety = e.is_safety(), error = %e, "Retry failed");
                let updated = self.mockups.update(id, |m| {
                    m.fail()?;
                    Ok(m.clone())
                });
                (updated, Some(e))
            }
        };

        let mockup = updated.map_err(|e| SuiteError::from_domain(id, e))?;
        Ok(RetryOutcome { mockup, error })
    }
}
