//! Bulk export for the Padrón list engine.
//!
//! Export endpoints come and go per deployment, so the exporter walks an
//! ordered candidate list: a 404-class answer advances silently to the next
//! endpoint, any other failure advances with a warning, and when every
//! candidate is exhausted the currently-visible rows and columns are
//! serialized locally to delimited text. Export never fails silently.

pub mod api;
mod exporter;

pub use api::{ExportApi, ExportApiError, ExportFile};
pub use exporter::{BulkExporter, ExportError, ExportResult};
