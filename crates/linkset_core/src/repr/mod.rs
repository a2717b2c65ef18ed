//! Representation assembly.
//!
//! # Responsibility
//! - Synthesize the exact link set valid for an entity's current
//!   lifecycle state, freshly on every call.
//!
//! # Invariants
//! - Identical entity state yields an identical representation: link
//!   order comes from insertion order and sorted set names, never from
//!   randomness or time.
//! - No link points at a deleted entity at assembly time.

use crate::model::item::{Item, ItemId};
use crate::model::link::{Link, REL_SET, REL_SOURCE};
use crate::model::locator::Locator;
use crate::model::pending_copy::PendingCopy;
use crate::model::representation::{Representation, ReprStatus};

/// Root listing: `self` plus one `set` link per registered set.
pub fn root_representation(sets: &[String]) -> Representation {
    let mut links = vec![Link::self_of(Locator::Root)];
    for set in sets {
        links.push(Link::read(
            REL_SET,
            Locator::Set {
                set: set.to_string(),
            },
        ));
    }
    Representation {
        status: ReprStatus::Ok,
        name: None,
        data: None,
        links,
    }
}

/// Set representation: `self`, `create`, one `item` link per active
/// member in insertion order. Deleted members never appear.
pub fn set_representation(name: &str, members: &[ItemId]) -> Representation {
    let mut links = vec![
        Link::self_of(Locator::Set {
            set: name.to_string(),
        }),
        Link::create_in(name),
    ];
    for member in members {
        links.push(Link::member(name, *member));
    }
    Representation {
        status: ReprStatus::Ok,
        name: Some(name.to_string()),
        data: None,
        links,
    }
}

/// Item representation: `self`, `update`, `delete`, `set`, then one
/// copy affordance per registered set other than its own.
///
/// Only called for snapshots in the active state; deleted items resolve
/// to the not-found sentinel before link synthesis is ever reached.
pub fn item_representation(
    item: &Item,
    registered_sets: &[String],
    status: ReprStatus,
) -> Representation {
    let mut links = vec![
        Link::self_of(item.locator()),
        Link::update_of(&item.set, item.id),
        Link::delete_of(&item.set, item.id),
        Link::owning_set(&item.set),
    ];
    for target in registered_sets {
        if target != &item.set {
            links.push(Link::copy_to(&item.set, item.id, target));
        }
    }
    Representation {
        status,
        name: Some(item.locator().to_string()),
        data: Some(item.payload.clone()),
        links,
    }
}

/// Copy request representation.
///
/// While pending it offers `execute-copy`; once committed it offers an
/// `item` link to the created item instead. `data` carries the command
/// snapshot either way.
pub fn pending_copy_representation(copy: &PendingCopy) -> Representation {
    let mut links = vec![
        Link::self_of(copy.locator()),
        Link::read(REL_SOURCE, copy.source_locator()),
    ];
    match copy.created_item {
        None => links.push(Link::execute_copy(copy.id)),
        Some(created) => links.push(Link::member(&copy.target_set, created)),
    }
    Representation {
        status: ReprStatus::Ok,
        name: Some(copy.locator().to_string()),
        data: Some(copy.command.clone()),
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        item_representation, pending_copy_representation, root_representation, set_representation,
    };
    use crate::model::item::Item;
    use crate::model::link::{REL_EXECUTE_COPY, REL_ITEM, REL_SELF};
    use crate::model::payload::Payload;
    use crate::model::pending_copy::PendingCopy;
    use crate::model::representation::ReprStatus;
    use uuid::Uuid;

    fn registered() -> Vec<String> {
        vec![
            "archive".to_string(),
            "forms".to_string(),
            "publishedForms".to_string(),
        ]
    }

    #[test]
    fn identical_state_yields_identical_links() {
        let item = Item::new("forms", Payload::from("hello"));
        let first = item_representation(&item, &registered(), ReprStatus::Ok);
        let second = item_representation(&item, &registered(), ReprStatus::Ok);
        assert_eq!(first, second);
    }

    #[test]
    fn item_offers_no_copy_affordance_toward_its_own_set() {
        let item = Item::new("forms", Payload::from("hello"));
        let repr = item_representation(&item, &registered(), ReprStatus::Ok);

        assert!(repr.find_link("copy-to-forms").is_none());
        assert!(repr.find_link("copy-to-archive").is_some());
        assert!(repr.find_link("copy-to-publishedForms").is_some());
    }

    #[test]
    fn set_links_members_in_given_order() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let repr = set_representation("forms", &[first, second]);

        let members = repr.find_links(REL_ITEM);
        assert_eq!(members.len(), 2);
        assert_eq!(
            members[0].target,
            crate::model::locator::Locator::Item {
                set: "forms".to_string(),
                item: first,
            }
        );
    }

    #[test]
    fn root_lists_every_registered_set() {
        let repr = root_representation(&registered());
        assert!(repr.find_link(REL_SELF).is_some());
        assert_eq!(repr.find_links("set").len(), 3);
        assert!(repr.name.is_none());
        assert!(repr.data.is_none());
    }

    #[test]
    fn committed_copy_swaps_execute_for_item_link() {
        let mut copy =
            PendingCopy::new("forms", Uuid::new_v4(), "publishedForms", Payload::from("x"));
        let pending_repr = pending_copy_representation(&copy);
        assert!(pending_repr.find_link(REL_EXECUTE_COPY).is_some());
        assert!(pending_repr.find_link(REL_ITEM).is_none());

        let created = Uuid::new_v4();
        copy.commit(created).expect("commit should succeed");
        let committed_repr = pending_copy_representation(&copy);
        assert!(committed_repr.find_link(REL_EXECUTE_COPY).is_none());
        assert!(committed_repr.find_link(REL_ITEM).is_some());
    }
}
