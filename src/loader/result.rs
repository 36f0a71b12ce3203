//! Load outcomes.

use super::error::LoadErrorKind;

/// The result of one `ScriptLoader::load` call.
///
/// Errors are already reported by the time this is returned; the outcome
/// only tells the caller which path ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum LoadOutcome {
    /// The file was read and handed to the sink
    Loaded { bytes: usize },
    /// The load failed and the sink was not touched
    Failed(LoadErrorKind),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Failure class, if any.
    pub fn error_kind(&self) -> Option<LoadErrorKind> {
        match self {
            Self::Loaded { .. } => None,
            Self::Failed(kind) => Some(*kind),
        }
    }
}
