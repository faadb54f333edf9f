//! The endpoint fallback chain and the local delimited-text fallback.

use crate::api::{ExportApi, ExportApiError, ExportFile};
use padron_types::Entity;
use padron_viewconfig::ColumnConfig;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors from the local fallback serialization. Endpoint failures never
/// surface here; they only advance the chain.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize fallback file: {0}")]
    Serialize(#[from] csv::Error),
}

/// Walks the export endpoint candidates in order, with a local CSV of the
/// visible rows and columns as the last resort.
pub struct BulkExporter {
    api: Arc<dyn ExportApi>,
    endpoints: Vec<String>,
    fallback_filename: String,
}

impl BulkExporter {
    /// Creates an exporter over the ordered endpoint candidates.
    pub fn new(api: Arc<dyn ExportApi>, endpoints: Vec<String>) -> Self {
        Self {
            api,
            endpoints,
            fallback_filename: "listado_padron.csv".to_string(),
        }
    }

    /// Overrides the filename of the locally-generated fallback.
    #[must_use]
    pub fn with_fallback_filename(mut self, filename: impl Into<String>) -> Self {
        self.fallback_filename = filename.into();
        self
    }

    /// Produces the export: the first endpoint that answers wins; if every
    /// candidate fails, the visible rows and columns are serialized
    /// locally.
    ///
    /// `rows` are the currently-derived records; `columns` the visible
    /// column configuration, in display order.
    pub async fn export(
        &self,
        rows: &[Entity],
        columns: &[ColumnConfig],
    ) -> ExportResult<ExportFile> {
        for endpoint in &self.endpoints {
            match self.api.download(endpoint).await {
                Ok(file) => {
                    info!(%endpoint, "export served by backend");
                    return Ok(file);
                }
                Err(ExportApiError::NotFound) => {
                    debug!(%endpoint, "export endpoint not available, trying next");
                }
                Err(err) => {
                    warn!(%endpoint, "export endpoint failed, trying next: {err}");
                }
            }
        }

        info!(
            rows = rows.len(),
            "no export endpoint available, generating local file"
        );
        self.fallback_csv(rows, columns)
    }

    /// Serializes `rows` × `columns` to semicolon-delimited text, the
    /// convention the registry's spreadsheet users expect.
    fn fallback_csv(&self, rows: &[Entity], columns: &[ColumnConfig]) -> ExportResult<ExportFile> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b';')
            .from_writer(Vec::new());

        writer.write_record(columns.iter().map(|c| c.label.as_str()))?;
        for row in rows {
            let record: Vec<String> = columns.iter().map(|c| render_cell(row, &c.key)).collect();
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|err| ExportError::Serialize(csv::Error::from(err.into_error())))?;
        Ok(ExportFile {
            filename: self.fallback_filename.clone(),
            content_type: "text/csv".to_string(),
            bytes,
        })
    }
}

fn render_cell(entity: &Entity, key: &str) -> String {
    if key == "estado" {
        return entity.state.label().to_string();
    }
    entity
        .field(key)
        .map(|value| value.display_text())
        .unwrap_or_default()
}
