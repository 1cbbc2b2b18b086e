//! Export use cases - batch zip download and single-render download.
//!
//! Exports read the record table and never mutate it.

use std::sync::Arc;

use merchmagic_domain::{
    archive_entry_name, archive_file_name, item_export_file_name, DomainError, MockupId,
};

use crate::entities::MockupStore;
use crate::infrastructure::archive::{build_archive, ArchiveEntry, ArchiveError};
use crate::infrastructure::imaging::{render_export, ImagingError};
use crate::infrastructure::ports::ClockPort;
use crate::use_cases::editor::EditorSessions;

pub const ZIP_CONTENT_TYPE: &str = "application/zip";
pub const PNG_CONTENT_TYPE: &str = "image/png";

/// A file ready to hand to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Mockup not found: {0}")]
    NotFound(MockupId),
    #[error("Mockup {0} has no render to export")]
    NotReady(MockupId),
    #[error("Stored render is not valid base64: {0}")]
    Decode(DomainError),
    #[error(transparent)]
    Imaging(#[from] ImagingError),
    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

/// Container for export use cases.
pub struct ExportUseCases {
    pub suite: Arc<ExportSuite>,
    pub mockup: Arc<ExportMockup>,
}

impl ExportUseCases {
    pub fn new(suite: Arc<ExportSuite>, mockup: Arc<ExportMockup>) -> Self {
        Self { suite, mockup }
    }
}

pub struct ExportSuite {
    mockups: Arc<MockupStore>,
    clock: Arc<dyn ClockPort>,
}

impl ExportSuite {
    pub fn new(mockups: Arc<MockupStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { mockups, clock }
    }

    /// Zip every ready render. `None` when nothing is ready.
    pub fn execute(&self) -> Result<Option<DownloadFile>, ExportError> {
        let suite = self.mockups.snapshot();
        let ready: Vec<_> = suite.ready_mockups().collect();
        if ready.is_empty() {
            tracing::debug!("Nothing ready to export");
            return Ok(None);
        }

        let mut entries = Vec::with_capacity(ready.len());
        for mockup in ready {
            let Some(image) = mockup.image() else {
                continue;
            };
            let bytes = image.decode().map_err(ExportError::Decode)?;
            entries.push(ArchiveEntry::new(
                archive_entry_name(mockup.product, mockup.id),
                bytes,
            ));
        }

        let bytes = build_archive(&entries)?;
        let file_name = archive_file_name(self.clock.now());
        tracing::info!(
            file_name = %file_name,
            entries = entries.len(),
            size = bytes.len(),
            "Suite exported"
        );

        Ok(Some(DownloadFile {
            file_name,
            content_type: ZIP_CONTENT_TYPE,
            bytes,
        }))
    }
}

pub struct ExportMockup {
    mockups: Arc<MockupStore>,
    sessions: Arc<EditorSessions>,
    clock: Arc<dyn ClockPort>,
}

impl ExportMockup {
    pub fn new(
        mockups: Arc<MockupStore>,
        sessions: Arc<EditorSessions>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            mockups,
            sessions,
            clock,
        }
    }

    /// Export one render with the editor's flip and filter baked in.
    pub fn execute(&self, id: MockupId) -> Result<DownloadFile, ExportError> {
        let mockup = self.mockups.get(id).ok_or(ExportError::NotFound(id))?;
        let image = mockup.image().ok_or(ExportError::NotReady(id))?;
        let raw = image.decode().map_err(ExportError::Decode)?;

        let view = self.sessions.view(id);
        let bytes = render_export(&raw, &view)?;

        Ok(DownloadFile {
            file_name: item_export_file_name(mockup.product, self.clock.now()),
            content_type: PNG_CONTENT_TYPE,
            bytes,
        })
    }
}
