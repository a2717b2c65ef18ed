//! Authoritative store: errors, resolution outcome and the in-memory
//! implementation.
//!
//! # Responsibility
//! - Define the semantic refusal taxonomy every operation reports.
//! - Keep the `Representation | NotFound` sum `resolve` and `follow`
//!   return, with the refusal cause preserved for diagnostics.
//!
//! # Invariants
//! - Missing or deleted entities are reported as data, never as panics.
//! - Invalid transitions are distinguishable internally but reach
//!   callers the same way as missing entities.

use crate::model::item::ItemId;
use crate::model::link::LinkMethod;
use crate::model::locator::Locator;
use crate::model::pending_copy::{CopyId, CopyStateError};
use crate::model::representation::Representation;
use crate::model::set::SetNameError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;

pub use memory::Store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Semantic refusal raised by store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    SetNotFound(String),
    ItemNotFound { set: String, item: ItemId },
    CopyNotFound(CopyId),
    CopyAlreadyCommitted(CopyId),
    MethodMismatch { rel: String, method: LinkMethod },
    MissingBody { rel: String },
    InvalidSetName { name: String, reason: SetNameError },
}

impl StoreError {
    /// Whether this refusal is a lifecycle or method violation rather
    /// than a missing entity. Callers of `resolve`/`follow` observe
    /// both classes uniformly as not-found.
    pub fn is_invalid_transition(&self) -> bool {
        matches!(
            self,
            Self::CopyAlreadyCommitted(_) | Self::MethodMismatch { .. } | Self::MissingBody { .. }
        )
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SetNotFound(set) => write!(f, "set not found: {set}"),
            Self::ItemNotFound { set, item } => write!(f, "item not found: {set}/{item}"),
            Self::CopyNotFound(copy) => write!(f, "copy request not found: {copy}"),
            Self::CopyAlreadyCommitted(copy) => {
                write!(f, "copy request {copy} is already committed")
            }
            Self::MethodMismatch { rel, method } => {
                write!(f, "link `{rel}` does not permit a {method:?} operation")
            }
            Self::MissingBody { rel } => write!(f, "link `{rel}` requires a body"),
            Self::InvalidSetName { name, reason } => {
                write!(f, "cannot register set `{name}`: {reason}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSetName { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl From<CopyStateError> for StoreError {
    fn from(value: CopyStateError) -> Self {
        match value {
            CopyStateError::AlreadyCommitted(copy) => Self::CopyAlreadyCommitted(copy),
        }
    }
}

/// Outcome of resolving a locator or following a link.
///
/// The not-found arm is a sentinel value, not a propagated error: it is
/// the engine's answer, carrying the refusal cause for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Representation),
    NotFound(StoreError),
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// The representation, when found.
    pub fn found(self) -> Option<Representation> {
        match self {
            Self::Found(repr) => Some(repr),
            Self::NotFound(_) => None,
        }
    }

    /// The refusal cause, when not found.
    pub fn denial(&self) -> Option<&StoreError> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(cause) => Some(cause),
        }
    }

    pub(crate) fn from_result(result: StoreResult<Representation>) -> Self {
        match result {
            Ok(repr) => Self::Found(repr),
            Err(cause) => Self::NotFound(cause),
        }
    }
}

impl Display for Resolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found(repr) => write!(f, "found({:?})", repr.status),
            Self::NotFound(cause) => write!(f, "not_found({cause})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Resolution, StoreError};
    use crate::model::link::LinkMethod;
    use uuid::Uuid;

    #[test]
    fn invalid_transition_classification() {
        assert!(StoreError::CopyAlreadyCommitted(Uuid::new_v4()).is_invalid_transition());
        assert!(StoreError::MethodMismatch {
            rel: "self".to_string(),
            method: LinkMethod::Create,
        }
        .is_invalid_transition());
        assert!(StoreError::MissingBody {
            rel: "create".to_string()
        }
        .is_invalid_transition());
        assert!(!StoreError::SetNotFound("forms".to_string()).is_invalid_transition());
    }

    #[test]
    fn resolution_exposes_denial_cause() {
        let resolution =
            Resolution::from_result(Err(StoreError::SetNotFound("missing".to_string())));
        assert!(resolution.is_not_found());
        assert_eq!(
            resolution.denial(),
            Some(&StoreError::SetNotFound("missing".to_string()))
        );
        assert!(resolution.found().is_none());
    }
}
