//! Local file attachment inspection
//!
//! Turns a path given on the command line into an [`Attachment`]: the file
//! name plus its size from file-system metadata. The content is never read.

use regform_domain::Attachment;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while inspecting an attachment
#[derive(Error, Debug)]
pub enum AttachmentError {
    #[error("Attachment not found: {0}")]
    NotFound(PathBuf),

    #[error("Attachment is not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Could not read attachment metadata for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads attachment name and size from the local file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalAttachmentInspector;

impl LocalAttachmentInspector {
    pub fn new() -> Self {
        Self
    }

    pub fn inspect(&self, path: impl AsRef<Path>) -> Result<Attachment, AttachmentError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => AttachmentError::NotFound(path.to_path_buf()),
            _ => AttachmentError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        if !metadata.is_file() {
            return Err(AttachmentError::NotAFile(path.to_path_buf()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Attachment {} ({} bytes)", name, metadata.len());
        Ok(Attachment::new(name, metadata.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_reads_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Jane Doe CV.PDF");
        std::fs::write(&path, vec![0u8; 2048]).unwrap();

        let attachment = LocalAttachmentInspector::new().inspect(&path).unwrap();
        assert_eq!(attachment.name, "Jane Doe CV.PDF");
        assert_eq!(attachment.size_bytes, 2048);
        assert_eq!(attachment.extension(), ".pdf");
    }

    #[test]
    fn test_inspect_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalAttachmentInspector::new()
            .inspect(dir.path().join("missing.pdf"))
            .unwrap_err();
        assert!(matches!(err, AttachmentError::NotFound(_)));
    }

    #[test]
    fn test_inspect_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalAttachmentInspector::new().inspect(dir.path()).unwrap_err();
        assert!(matches!(err, AttachmentError::NotAFile(_)));
    }
}
