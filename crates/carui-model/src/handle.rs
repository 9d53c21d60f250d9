#![forbid(unsafe_code)]

//! Opaque interaction handles.

use serde::{Deserialize, Serialize};

/// Opaque integer identifying an interactive element for event correlation.
///
/// Handles are assigned by the application runtime when it emits the render
/// tree and are stored verbatim on built elements; this crate never compares
/// or deduplicates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionHandle(pub i64);

impl From<i64> for InteractionHandle {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl std::fmt::Display for InteractionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
