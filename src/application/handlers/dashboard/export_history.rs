//! ExportHistoryHandler - Downloads the prediction history as CSV.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::ErrorCode;
use crate::ports::{DashboardError, DashboardSource};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Source(#[from] DashboardError),

    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExportError::Source(err) => err.code(),
            ExportError::Io(_) => ErrorCode::ExportFailed,
        }
    }
}

/// Handler for the history CSV download.
pub struct ExportHistoryHandler {
    source: Arc<dyn DashboardSource>,
}

impl ExportHistoryHandler {
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    /// Fetches the CSV body.
    pub async fn export(&self) -> Result<String, ExportError> {
        Ok(self.source.export_history().await?)
    }

    /// Fetches the CSV and writes it to `path`, returning the bytes written.
    pub async fn export_to(&self, path: impl AsRef<Path>) -> Result<usize, ExportError> {
        let path = path.as_ref();
        let csv = self.export().await?;
        tokio::fs::write(path, csv.as_bytes()).await?;

        info!(path = %path.display(), bytes = csv.len(), "History exported");
        Ok(csv.len())
    }
}
