//! Stored item model.
//!
//! # Responsibility
//! - Define the one resource shape the engine stores inside sets.
//! - Provide lifecycle helpers for tombstone semantics.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - An item belongs to exactly one set for its whole lifetime.
//! - Once tombstoned, an item is invisible to every resolution.

use crate::model::locator::Locator;
use crate::model::payload::Payload;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one item inside its owning set.
pub type ItemId = Uuid;

/// Item lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Active,
    Deleted,
}

/// One stored resource: opaque payload plus identity and owning set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub set: String,
    pub payload: Payload,
    pub state: ItemState,
}

impl Item {
    /// Creates an active item with a fresh stable id.
    pub fn new(set: impl Into<String>, payload: Payload) -> Self {
        Self::with_id(Uuid::new_v4(), set, payload)
    }

    /// Creates an active item with a caller-provided id.
    ///
    /// The id must remain stable for the item's lifetime.
    pub fn with_id(id: ItemId, set: impl Into<String>, payload: Payload) -> Self {
        Self {
            id,
            set: set.into(),
            payload,
            state: ItemState::Active,
        }
    }

    /// Tombstones this item. The identity stays occupied forever.
    pub fn mark_deleted(&mut self) {
        self.state = ItemState::Deleted;
    }

    pub fn is_active(&self) -> bool {
        self.state == ItemState::Active
    }

    /// Address of this item inside its owning set.
    pub fn locator(&self) -> Locator {
        Locator::Item {
            set: self.set.clone(),
            item: self.id,
        }
    }
}
