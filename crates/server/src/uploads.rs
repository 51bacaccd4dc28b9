// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Local storage for uploaded files.

use std::path::{Path, PathBuf};

use axum::{body::Bytes, extract::Multipart, http::StatusCode};
use thiserror::Error;
use tracing::{debug, error};

use crate::error::HttpError;

/// The multipart field that carries the file.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file uploaded")]
    Missing,
    #[error("Malformed upload: {0}")]
    Malformed(String),
    #[error("Failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

impl From<UploadError> for HttpError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Missing => Self::bad_request(err.to_string()),
            UploadError::Malformed(_) => {
                debug!(error = %err, "Upload refused");
                Self::bad_request(err.to_string())
            }
            UploadError::Io(_) => {
                error!(error = %err, "Upload failed");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// A directory of uploaded files.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `contents` under `stored_name`, creating the directory on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Io` if the directory or file cannot be written.
    pub async fn store(&self, stored_name: &str, contents: &[u8]) -> Result<PathBuf, UploadError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path: PathBuf = self.root.join(stored_name);
        tokio::fs::write(&path, contents).await?;
        debug!(path = %path.display(), bytes = contents.len(), "Upload stored");
        Ok(path)
    }
}

/// Reads the first `file` field of a multipart body.
///
/// # Returns
///
/// The client's file name (possibly empty) and the file contents.
///
/// # Errors
///
/// Returns `UploadError::Missing` when no `file` field is present and
/// `UploadError::Malformed` when the body cannot be parsed.
pub async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed(e.body_text()))?
    {
        if field.name() == Some(FILE_FIELD) {
            let original: String = field.file_name().unwrap_or_default().to_string();
            let contents: Bytes = field
                .bytes()
                .await
                .map_err(|e| UploadError::Malformed(e.body_text()))?;
            return Ok((original, contents));
        }
    }
    Err(UploadError::Missing)
}
