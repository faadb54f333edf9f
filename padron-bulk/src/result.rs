//! The aggregate outcome of one orchestrated batch.

use crate::api::StateChangeError;
use padron_types::EntityId;

/// Failure classification, mapped to the fixed user-facing messages the
/// result dialog shows per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    NotFound,
    Forbidden,
    Network,
}

impl FailureKind {
    /// The fixed message for this failure class.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            FailureKind::Validation => "El cambio de estado no es válido para este registro",
            FailureKind::NotFound => "El registro ya no existe en el padrón",
            FailureKind::Forbidden => "No cuenta con permisos para modificar este registro",
            FailureKind::Network => "No se pudo contactar al servidor, intente nuevamente",
        }
    }
}

impl From<&StateChangeError> for FailureKind {
    fn from(error: &StateChangeError) -> Self {
        match error {
            StateChangeError::Validation(_) => FailureKind::Validation,
            StateChangeError::NotFound => FailureKind::NotFound,
            StateChangeError::Forbidden => FailureKind::Forbidden,
            StateChangeError::Network(_) => FailureKind::Network,
        }
    }
}

/// How one record fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure {
        kind: FailureKind,
        /// Human-readable detail: the fixed class message, extended with
        /// the upstream text where the class carries one.
        detail: String,
    },
}

impl Outcome {
    /// Builds the failure outcome for an upstream error.
    #[must_use]
    pub fn from_error(error: &StateChangeError) -> Self {
        let kind = FailureKind::from(error);
        let detail = match error {
            StateChangeError::Validation(inner) | StateChangeError::Network(inner) => {
                format!("{}: {inner}", kind.message())
            }
            _ => kind.message().to_string(),
        };
        Outcome::Failure { kind, detail }
    }

    /// True for [`Outcome::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// One record's entry in the aggregate result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub id: EntityId,
    pub outcome: Outcome,
}

impl ItemOutcome {
    #[must_use]
    pub fn success(id: EntityId) -> Self {
        Self {
            id,
            outcome: Outcome::Success,
        }
    }

    #[must_use]
    pub fn failure(id: EntityId, error: &StateChangeError) -> Self {
        Self {
            id,
            outcome: Outcome::from_error(error),
        }
    }
}

/// The consolidated result of one batch: every requested id exactly once,
/// in request order. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkOperationResult {
    requested: usize,
    outcomes: Vec<ItemOutcome>,
}

impl BulkOperationResult {
    pub(crate) fn new(outcomes: Vec<ItemOutcome>) -> Self {
        Self {
            requested: outcomes.len(),
            outcomes,
        }
    }

    /// Number of records the batch was asked to transition.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Per-record outcomes, in request order.
    #[must_use]
    pub fn outcomes(&self) -> &[ItemOutcome] {
        &self.outcomes
    }

    /// Number of records that transitioned.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_success())
            .count()
    }

    /// Number of records that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.requested - self.succeeded()
    }

    /// True when every record transitioned.
    #[must_use]
    pub fn is_full_success(&self) -> bool {
        self.failed() == 0
    }

    /// The failed entries only, for the per-row error list.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.is_success())
    }
}
