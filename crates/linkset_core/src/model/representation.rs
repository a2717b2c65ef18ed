//! Representation contract handed to adapters.

use crate::model::link::Link;
use crate::model::payload::Payload;
use serde::{Deserialize, Serialize};

/// Symbolic outcome of the operation that produced a representation.
///
/// Deliberately not an HTTP status; the transport adapter owns that
/// mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReprStatus {
    Ok,
    Created,
    NotFound,
}

/// Description of an entity's current state plus its valid links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representation {
    pub status: ReprStatus,
    /// Canonical locator text of the subject; absent for the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Opaque payload; absent for sets and the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
    pub links: Vec<Link>,
}

impl Representation {
    /// First link carrying the given relation, if any.
    pub fn find_link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }

    /// Every link carrying the given relation, in representation order.
    pub fn find_links(&self, rel: &str) -> Vec<&Link> {
        self.links.iter().filter(|link| link.rel == rel).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Representation, ReprStatus};
    use crate::model::link::{Link, REL_ITEM, REL_SELF};
    use crate::model::locator::Locator;
    use uuid::Uuid;

    #[test]
    fn find_link_returns_first_match_and_find_links_all() {
        let repr = Representation {
            status: ReprStatus::Ok,
            name: Some("forms".to_string()),
            data: None,
            links: vec![
                Link::self_of(Locator::Set {
                    set: "forms".to_string(),
                }),
                Link::member("forms", Uuid::new_v4()),
                Link::member("forms", Uuid::new_v4()),
            ],
        };

        assert!(repr.find_link(REL_SELF).is_some());
        assert_eq!(repr.find_links(REL_ITEM).len(), 2);
        assert!(repr.find_link("missing").is_none());
    }
}
