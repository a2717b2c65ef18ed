//! Link values describing legal transitions.
//!
//! A link is a capability description: relation name, resolvable
//! target and the one operation class it invites. Links are recomputed
//! from current state for every representation and never persisted, so
//! a previously issued link can legitimately stop resolving once its
//! referent's lifecycle advances.

use crate::model::item::ItemId;
use crate::model::locator::Locator;
use crate::model::pending_copy::CopyId;
use serde::{Deserialize, Serialize};

/// Relation of a representation to itself.
pub const REL_SELF: &str = "self";
/// Relation offering creation of a new member inside a set.
pub const REL_CREATE: &str = "create";
/// Relation offering payload replacement of an item.
pub const REL_UPDATE: &str = "update";
/// Relation offering deletion of an item.
pub const REL_DELETE: &str = "delete";
/// Back-reference from an item to its owning set.
pub const REL_SET: &str = "set";
/// Reference from a set to one active member.
pub const REL_ITEM: &str = "item";
/// Back-reference from a copy request to its source item.
pub const REL_SOURCE: &str = "source";
/// Relation committing a pending copy.
pub const REL_EXECUTE_COPY: &str = "execute-copy";

/// Relation name of the copy affordance toward one target set.
///
/// The target is named in the relation itself so multiple destinations
/// stay independently discoverable on one item.
pub fn copy_to_relation(target: &str) -> String {
    format!("copy-to-{target}")
}

/// Operation class a link invites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMethod {
    Read,
    Create,
    Mutate,
    Execute,
}

/// One legal transition offered by a representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub target: Locator,
    pub method: LinkMethod,
    pub requires_body: bool,
}

impl Link {
    /// Generic read link with a caller-chosen relation.
    pub fn read(rel: impl Into<String>, target: Locator) -> Self {
        Self {
            rel: rel.into(),
            target,
            method: LinkMethod::Read,
            requires_body: false,
        }
    }

    /// `self` link of the given subject.
    pub fn self_of(target: Locator) -> Self {
        Self::read(REL_SELF, target)
    }

    /// `set` back-reference to an owning set.
    pub fn owning_set(set: &str) -> Self {
        Self::read(
            REL_SET,
            Locator::Set {
                set: set.to_string(),
            },
        )
    }

    /// `item` reference from a set to one active member.
    pub fn member(set: &str, item: ItemId) -> Self {
        Self::read(
            REL_ITEM,
            Locator::Item {
                set: set.to_string(),
                item,
            },
        )
    }

    /// `create` link on a set; the new member payload travels as body.
    pub fn create_in(set: &str) -> Self {
        Self {
            rel: REL_CREATE.to_string(),
            target: Locator::Set {
                set: set.to_string(),
            },
            method: LinkMethod::Create,
            requires_body: true,
        }
    }

    /// `update` link on an item; the replacement payload travels as body.
    pub fn update_of(set: &str, item: ItemId) -> Self {
        Self {
            rel: REL_UPDATE.to_string(),
            target: Locator::Item {
                set: set.to_string(),
                item,
            },
            method: LinkMethod::Mutate,
            requires_body: true,
        }
    }

    /// `delete` link on an item.
    pub fn delete_of(set: &str, item: ItemId) -> Self {
        Self {
            rel: REL_DELETE.to_string(),
            target: Locator::Item {
                set: set.to_string(),
                item,
            },
            method: LinkMethod::Mutate,
            requires_body: false,
        }
    }

    /// `copy-to-<target>` affordance on an item.
    pub fn copy_to(set: &str, item: ItemId, target: &str) -> Self {
        Self {
            rel: copy_to_relation(target),
            target: Locator::Copy {
                set: set.to_string(),
                item,
                target: target.to_string(),
            },
            method: LinkMethod::Execute,
            requires_body: false,
        }
    }

    /// `execute-copy` link on a pending copy. A body, when supplied,
    /// overrides the snapshotted command.
    pub fn execute_copy(copy: CopyId) -> Self {
        Self {
            rel: REL_EXECUTE_COPY.to_string(),
            target: Locator::PendingCopy { copy },
            method: LinkMethod::Execute,
            requires_body: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{copy_to_relation, Link, LinkMethod};
    use crate::model::locator::Locator;
    use uuid::Uuid;

    #[test]
    fn copy_to_relation_names_the_target() {
        assert_eq!(copy_to_relation("publishedForms"), "copy-to-publishedForms");
    }

    #[test]
    fn body_expectations_follow_the_operation() {
        let item = Uuid::new_v4();
        assert!(Link::create_in("forms").requires_body);
        assert!(Link::update_of("forms", item).requires_body);
        assert!(!Link::delete_of("forms", item).requires_body);
        assert!(!Link::copy_to("forms", item, "archive").requires_body);
    }

    #[test]
    fn copy_affordance_targets_the_copy_locator() {
        let item = Uuid::new_v4();
        let link = Link::copy_to("forms", item, "publishedForms");
        assert_eq!(link.method, LinkMethod::Execute);
        assert_eq!(
            link.target,
            Locator::Copy {
                set: "forms".to_string(),
                item,
                target: "publishedForms".to_string(),
            }
        );
    }
}
