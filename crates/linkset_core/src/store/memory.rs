//! In-memory authoritative store.
//!
//! # Responsibility
//! - Own every set, item and pending copy in one process-wide registry
//!   and resolve any locator to the current state of its referent.
//! - Serialize mutations behind a single writer lock while reads share
//!   a read lock.
//!
//! # Invariants
//! - Deleted items stay as tombstones; an identity is never reused.
//! - Committing a pending copy and creating its item happen in one
//!   step: no reader observes one without the other.
//! - Re-registering a set name returns the existing set untouched.

use crate::model::item::{Item, ItemId};
use crate::model::link::{copy_to_relation, LinkMethod};
use crate::model::locator::Locator;
use crate::model::payload::Payload;
use crate::model::pending_copy::{CopyId, PendingCopy};
use crate::model::representation::{Representation, ReprStatus};
use crate::model::set::validate_set_name;
use crate::repr;
use crate::store::{Resolution, StoreError, StoreResult};
use log::info;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// One registered set: members keyed by id, insertion order kept for
/// listing.
#[derive(Debug, Default)]
struct SetEntry {
    order: Vec<ItemId>,
    items: BTreeMap<ItemId, Item>,
}

impl SetEntry {
    /// Active member ids in insertion order.
    fn active_members(&self) -> Vec<ItemId> {
        self.order
            .iter()
            .filter(|id| {
                self.items
                    .get(*id)
                    .map(|item| item.is_active())
                    .unwrap_or(false)
            })
            .copied()
            .collect()
    }

    fn active_item(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id).filter(|item| item.is_active())
    }
}

#[derive(Debug, Default)]
struct StoreState {
    sets: BTreeMap<String, SetEntry>,
    copies: BTreeMap<CopyId, PendingCopy>,
}

impl StoreState {
    /// Sorted registered set names, the input for copy affordances and
    /// the root listing.
    fn set_names(&self) -> Vec<String> {
        self.sets.keys().cloned().collect()
    }
}

/// Process-wide registry mapping set names to sets, and the single
/// source of truth for existence checks.
///
/// Constructed explicitly and passed by reference; there is no global
/// instance, so tests can hold several isolated stores.
#[derive(Debug, Default)]
pub struct Store {
    state: RwLock<StoreState>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves any locator to the current state of its referent.
    ///
    /// Read-only: missing or deleted referents yield the not-found
    /// sentinel, never an error, and concurrent resolves do not block
    /// each other.
    pub fn resolve(&self, locator: &Locator) -> Resolution {
        let state = self.state.read();
        Resolution::from_result(resolve_in(&state, locator))
    }

    pub(crate) fn resolve_strict(&self, locator: &Locator) -> StoreResult<Representation> {
        let state = self.state.read();
        resolve_in(&state, locator)
    }

    /// Registers a set name, idempotently.
    ///
    /// Re-registering an existing name returns the existing set with
    /// its members intact.
    pub fn register_set(&self, name: &str) -> StoreResult<Representation> {
        let name = name.trim();
        validate_set_name(name).map_err(|reason| StoreError::InvalidSetName {
            name: name.to_string(),
            reason,
        })?;

        let mut state = self.state.write();
        let known = state.sets.contains_key(name);
        let entry = state.sets.entry(name.to_string()).or_default();
        let members = entry.active_members();
        if !known {
            info!("event=set_registered module=store status=ok set={name}");
        }
        Ok(repr::set_representation(name, &members))
    }

    /// Sorted names of every registered set.
    pub fn registered_sets(&self) -> Vec<String> {
        self.state.read().set_names()
    }

    /// Creates an active item with a fresh identity in a registered set.
    pub fn create_item(&self, set: &str, payload: Payload) -> StoreResult<Representation> {
        let mut state = self.state.write();
        if !state.sets.contains_key(set) {
            return Err(StoreError::SetNotFound(set.to_string()));
        }
        let names = state.set_names();

        let item = Item::new(set, payload);
        let entry = state
            .sets
            .get_mut(set)
            .ok_or_else(|| StoreError::SetNotFound(set.to_string()))?;
        entry.order.push(item.id);
        entry.items.insert(item.id, item.clone());

        info!(
            "event=item_created module=store status=ok set={set} item={}",
            item.id
        );
        Ok(repr::item_representation(&item, &names, ReprStatus::Created))
    }

    /// Replaces the payload of an active item; identity unchanged.
    pub fn update_item(
        &self,
        set: &str,
        item: ItemId,
        payload: Payload,
    ) -> StoreResult<Representation> {
        let mut state = self.state.write();
        let names = state.set_names();
        let entry = state
            .sets
            .get_mut(set)
            .ok_or_else(|| StoreError::SetNotFound(set.to_string()))?;
        let stored = entry
            .items
            .get_mut(&item)
            .filter(|stored| stored.is_active())
            .ok_or(StoreError::ItemNotFound {
                set: set.to_string(),
                item,
            })?;

        stored.payload = payload;
        let snapshot = stored.clone();

        info!("event=item_updated module=store status=ok set={set} item={item}");
        Ok(repr::item_representation(&snapshot, &names, ReprStatus::Ok))
    }

    /// Tombstones an active item and returns its last representation,
    /// equal to what a resolve immediately prior would have produced.
    pub fn delete_item(&self, set: &str, item: ItemId) -> StoreResult<Representation> {
        let mut state = self.state.write();
        let names = state.set_names();
        let entry = state
            .sets
            .get_mut(set)
            .ok_or_else(|| StoreError::SetNotFound(set.to_string()))?;
        let stored = entry
            .items
            .get_mut(&item)
            .filter(|stored| stored.is_active())
            .ok_or(StoreError::ItemNotFound {
                set: set.to_string(),
                item,
            })?;

        let last = stored.clone();
        stored.mark_deleted();

        info!("event=item_deleted module=store status=ok set={set} item={item}");
        Ok(repr::item_representation(&last, &names, ReprStatus::Ok))
    }

    /// Opens a fresh pending copy snapshotting the source payload.
    ///
    /// Every call yields an independent copy request; the source item
    /// is never touched.
    pub fn initiate_copy(
        &self,
        set: &str,
        item: ItemId,
        target: &str,
    ) -> StoreResult<Representation> {
        let mut state = self.state.write();
        if !state.sets.contains_key(target) {
            return Err(StoreError::SetNotFound(target.to_string()));
        }
        let source = state
            .sets
            .get(set)
            .ok_or_else(|| StoreError::SetNotFound(set.to_string()))?
            .active_item(&item)
            .ok_or(StoreError::ItemNotFound {
                set: set.to_string(),
                item,
            })?;

        let copy = PendingCopy::new(set, item, target, source.payload.clone());
        let representation = repr::pending_copy_representation(&copy);
        info!(
            "event=copy_initiated module=store status=ok source={set}/{item} target={target} copy={}",
            copy.id
        );
        state.copies.insert(copy.id, copy);
        Ok(representation)
    }

    /// Commits a pending copy: creates the item in the target set from
    /// the command (the optional override, else the snapshot) and marks
    /// the copy committed, as one atomic step under the writer lock.
    ///
    /// Execution is single-use: a committed copy fails instead of
    /// creating a second item.
    pub fn execute_copy(
        &self,
        copy: CopyId,
        command_override: Option<Payload>,
    ) -> StoreResult<Representation> {
        let mut state = self.state.write();

        let (target, command) = {
            let pending = state
                .copies
                .get(&copy)
                .ok_or(StoreError::CopyNotFound(copy))?;
            if !pending.is_pending() {
                return Err(StoreError::CopyAlreadyCommitted(copy));
            }
            (pending.target_set.clone(), pending.command.clone())
        };
        if !state.sets.contains_key(&target) {
            return Err(StoreError::SetNotFound(target));
        }
        let names = state.set_names();

        let item = Item::new(&target, command_override.unwrap_or(command));
        let entry = state
            .sets
            .get_mut(&target)
            .ok_or_else(|| StoreError::SetNotFound(target.clone()))?;
        entry.order.push(item.id);
        entry.items.insert(item.id, item.clone());

        let pending = state
            .copies
            .get_mut(&copy)
            .ok_or(StoreError::CopyNotFound(copy))?;
        pending.commit(item.id)?;

        info!(
            "event=copy_committed module=store status=ok copy={copy} target={target} item={}",
            item.id
        );
        Ok(repr::item_representation(&item, &names, ReprStatus::Created))
    }
}

fn resolve_in(state: &StoreState, locator: &Locator) -> StoreResult<Representation> {
    match locator {
        Locator::Root => Ok(repr::root_representation(&state.set_names())),
        Locator::Set { set } => {
            let entry = state
                .sets
                .get(set)
                .ok_or_else(|| StoreError::SetNotFound(set.clone()))?;
            Ok(repr::set_representation(set, &entry.active_members()))
        }
        Locator::Item { set, item } => {
            let stored = state
                .sets
                .get(set)
                .ok_or_else(|| StoreError::SetNotFound(set.clone()))?
                .active_item(item)
                .ok_or(StoreError::ItemNotFound {
                    set: set.clone(),
                    item: *item,
                })?;
            Ok(repr::item_representation(
                stored,
                &state.set_names(),
                ReprStatus::Ok,
            ))
        }
        // Initiation is a mutation and must flow through the
        // execute-method link; a plain read of the affordance is a
        // method violation, not a silent state change.
        Locator::Copy { target, .. } => Err(StoreError::MethodMismatch {
            rel: copy_to_relation(target),
            method: LinkMethod::Read,
        }),
        Locator::PendingCopy { copy } => {
            let stored = state
                .copies
                .get(copy)
                .ok_or(StoreError::CopyNotFound(*copy))?;
            Ok(repr::pending_copy_representation(stored))
        }
    }
}
