//! Zip archive builder for batch export.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One file inside the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Failed to write archive entry {file_name}: {message}")]
    Entry { file_name: String, message: String },
    #[error("Failed to finish archive: {0}")]
    Finish(String),
}

/// Build a deflate-compressed zip with one file per entry, in order.
pub fn build_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in entries {
        let entry_error = |e: &dyn std::fmt::Display| ArchiveError::Entry {
            file_name: entry.file_name.clone(),
            message: e.to_string(),
        };
        writer
            .start_file(entry.file_name.as_str(), options)
            .map_err(|e| entry_error(&e))?;
        writer.write_all(&entry.bytes).map_err(|e| entry_error(&e))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| ArchiveError::Finish(e.to_string()))?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    #[test]
    fn archive_contains_every_entry_in_order() {
        let entries = vec![
            ArchiveEntry::new("hoodie-ab12.png", vec![1, 2, 3]),
            ArchiveEntry::new("cap-cd34.png", vec![4, 5]),
        ];
        let bytes = build_archive(&entries).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);

        let mut first = archive.by_index(0).unwrap();
        assert_eq!(first.name(), "hoodie-ab12.png");
        let mut contents = Vec::new();
        first.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, vec![1, 2, 3]);
        drop(first);

        let second = archive.by_index(1).unwrap();
        assert_eq!(second.name(), "cap-cd34.png");
    }

    #[test]
    fn empty_archive_is_valid() {
        let bytes = build_archive(&[]).unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }
}
