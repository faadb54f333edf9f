//! Lifecycle states of registry records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a registry record.
///
/// Serialized in the backend's SCREAMING_SNAKE convention (`ACTIVO`,
/// `EN_TRAMITE`, ...). Which transitions are legal is decided upstream;
/// the engine only requests them and reports the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityState {
    Activo,
    Suspendido,
    Cancelado,
    EnTramite,
}

impl EntityState {
    /// All states, in the order they appear in filter pickers.
    #[must_use]
    pub const fn all() -> [EntityState; 4] {
        [
            EntityState::Activo,
            EntityState::Suspendido,
            EntityState::Cancelado,
            EntityState::EnTramite,
        ]
    }

    /// Wire representation (`ACTIVO`, `SUSPENDIDO`, ...).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            EntityState::Activo => "ACTIVO",
            EntityState::Suspendido => "SUSPENDIDO",
            EntityState::Cancelado => "CANCELADO",
            EntityState::EnTramite => "EN_TRAMITE",
        }
    }

    /// Human-readable label for grid cells and pickers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            EntityState::Activo => "Activo",
            EntityState::Suspendido => "Suspendido",
            EntityState::Cancelado => "Cancelado",
            EntityState::EnTramite => "En trámite",
        }
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVO" => Ok(EntityState::Activo),
            "SUSPENDIDO" => Ok(EntityState::Suspendido),
            "CANCELADO" => Ok(EntityState::Cancelado),
            "EN_TRAMITE" => Ok(EntityState::EnTramite),
            other => Err(crate::Error::UnknownState(other.to_string())),
        }
    }
}
