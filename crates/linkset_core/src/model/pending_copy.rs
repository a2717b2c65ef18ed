//! Cross-set copy workflow state.
//!
//! # Responsibility
//! - Hold the in-flight state of one copy request: source identity,
//!   target set and the command snapshot taken at initiation.
//! - Guard the single-use commit transition.
//!
//! # Invariants
//! - The command snapshot never changes after initiation.
//! - `commit` succeeds at most once; a committed copy is immutable.
//! - The source item is never touched by the workflow.

use crate::model::item::ItemId;
use crate::model::locator::Locator;
use crate::model::payload::Payload;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one copy request.
pub type CopyId = Uuid;

/// Copy workflow state tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyState {
    Pending,
    Committed,
}

/// Rejected copy state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyStateError {
    AlreadyCommitted(CopyId),
}

impl Display for CopyStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyCommitted(id) => {
                write!(f, "copy request {id} is already committed")
            }
        }
    }
}

impl Error for CopyStateError {}

/// One copy request, from initiation until (and past) commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCopy {
    pub id: CopyId,
    pub source_set: String,
    pub source_item: ItemId,
    pub target_set: String,
    /// Payload snapshot taken at initiation, presented to callers as
    /// editable command data.
    pub command: Payload,
    pub state: CopyState,
    /// Item produced by commit; `None` while pending.
    pub created_item: Option<ItemId>,
}

impl PendingCopy {
    /// Opens a fresh pending copy for one source item and target set.
    pub fn new(
        source_set: impl Into<String>,
        source_item: ItemId,
        target_set: impl Into<String>,
        command: Payload,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_set: source_set.into(),
            source_item,
            target_set: target_set.into(),
            command,
            state: CopyState::Pending,
            created_item: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == CopyState::Pending
    }

    /// Applies the one legal transition: pending -> committed.
    ///
    /// Records the created item so the committed copy stays resolvable
    /// for audit. A second commit is rejected, never double-applied.
    pub fn commit(&mut self, created: ItemId) -> Result<(), CopyStateError> {
        match self.state {
            CopyState::Pending => {
                self.state = CopyState::Committed;
                self.created_item = Some(created);
                Ok(())
            }
            CopyState::Committed => Err(CopyStateError::AlreadyCommitted(self.id)),
        }
    }

    /// Address of this copy request.
    pub fn locator(&self) -> Locator {
        Locator::PendingCopy { copy: self.id }
    }

    /// Address of the source item the snapshot was taken from.
    pub fn source_locator(&self) -> Locator {
        Locator::Item {
            set: self.source_set.clone(),
            item: self.source_item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CopyState, CopyStateError, PendingCopy};
    use crate::model::payload::Payload;
    use uuid::Uuid;

    #[test]
    fn new_copy_starts_pending_with_snapshot() {
        let source = Uuid::new_v4();
        let copy = PendingCopy::new("forms", source, "publishedForms", Payload::from("body"));
        assert_eq!(copy.state, CopyState::Pending);
        assert!(copy.is_pending());
        assert_eq!(copy.command.as_str(), "body");
        assert_eq!(copy.created_item, None);
    }

    #[test]
    fn commit_succeeds_once_and_records_created_item() {
        let mut copy =
            PendingCopy::new("forms", Uuid::new_v4(), "publishedForms", Payload::from("x"));
        let created = Uuid::new_v4();

        copy.commit(created).expect("first commit should succeed");
        assert_eq!(copy.state, CopyState::Committed);
        assert_eq!(copy.created_item, Some(created));

        let err = copy
            .commit(Uuid::new_v4())
            .expect_err("second commit must be rejected");
        assert_eq!(err, CopyStateError::AlreadyCommitted(copy.id));
        assert_eq!(copy.created_item, Some(created));
    }
}
