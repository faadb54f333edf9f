//! Export endpoint abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// A downloadable export produced by the backend or the local fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Errors reported by an export endpoint.
#[derive(Debug, Clone, Error)]
pub enum ExportApiError {
    /// 404-class: this endpoint is not deployed; try the next candidate.
    #[error("endpoint not available")]
    NotFound,

    /// The backend answered with an error.
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),
}

/// The export download backend.
#[async_trait]
pub trait ExportApi: Send + Sync {
    /// Requests the export from one endpoint.
    async fn download(&self, endpoint: &str) -> Result<ExportFile, ExportApiError>;
}

/// A scripted export backend for testing.
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Answers per endpoint from a scripted table; unscripted endpoints
    /// report [`ExportApiError::NotFound`].
    #[derive(Default)]
    pub struct MockExportApi {
        responses: Mutex<HashMap<String, Result<ExportFile, ExportApiError>>>,
        requested: Mutex<Vec<String>>,
    }

    impl MockExportApi {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Scripts the answer for one endpoint.
        pub fn respond(&self, endpoint: &str, response: Result<ExportFile, ExportApiError>) {
            self.responses
                .lock()
                .unwrap()
                .insert(endpoint.to_string(), response);
        }

        /// Endpoints hit so far, in order.
        #[must_use]
        pub fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExportApi for MockExportApi {
        async fn download(&self, endpoint: &str) -> Result<ExportFile, ExportApiError> {
            self.requested.lock().unwrap().push(endpoint.to_string());
            self.responses
                .lock()
                .unwrap()
                .get(endpoint)
                .cloned()
                .unwrap_or(Err(ExportApiError::NotFound))
        }
    }
}
