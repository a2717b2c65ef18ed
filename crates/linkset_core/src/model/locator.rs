//! Store-resolvable addresses.
//!
//! # Responsibility
//! - Define the identity space links can point at.
//! - Provide the canonical relative text form adapters embed into
//!   absolute link targets.
//!
//! # Invariants
//! - The text form round-trips through `parse` for every value.
//! - The reserved `copies` segment keeps pending-copy paths disjoint
//!   from set paths.

use crate::model::item::ItemId;
use crate::model::pending_copy::CopyId;
use crate::model::set::{validate_set_name, SetNameError, RESERVED_COPIES_SEGMENT};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Path segment marking the copy affordance of an item.
pub const COPY_TO_SEGMENT: &str = "copy-to";

/// Address of one resolvable entity inside a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Locator {
    /// The store root listing every registered set.
    Root,
    /// One named set.
    Set { set: String },
    /// One item inside its owning set.
    Item { set: String, item: ItemId },
    /// The copy affordance of one source item toward one target set.
    Copy {
        set: String,
        item: ItemId,
        target: String,
    },
    /// One copy request opened by following a copy affordance.
    PendingCopy { copy: CopyId },
}

/// Locator text form parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorParseError {
    InvalidSetSegment { segment: String, reason: SetNameError },
    InvalidId(String),
    UnrecognizedShape(String),
}

impl Display for LocatorParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSetSegment { segment, reason } => {
                write!(f, "invalid set segment `{segment}`: {reason}")
            }
            Self::InvalidId(value) => write!(f, "invalid id segment `{value}`"),
            Self::UnrecognizedShape(value) => {
                write!(f, "locator text `{value}` has no recognized shape")
            }
        }
    }
}

impl Error for LocatorParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidSetSegment { reason, .. } => Some(reason),
            Self::InvalidId(_) => None,
            Self::UnrecognizedShape(_) => None,
        }
    }
}

impl Locator {
    /// Parses the canonical relative text form.
    ///
    /// Leading/trailing whitespace and slashes are normalized away, so
    /// `"/forms"` and `"forms"` address the same set.
    pub fn parse(input: &str) -> Result<Self, LocatorParseError> {
        let normalized = input.trim().trim_matches('/');
        if normalized.is_empty() {
            return Ok(Self::Root);
        }

        let segments: Vec<&str> = normalized.split('/').collect();
        match segments.as_slice() {
            [RESERVED_COPIES_SEGMENT, id] => Ok(Self::PendingCopy {
                copy: parse_id(id)?,
            }),
            [set] => Ok(Self::Set {
                set: parse_set_segment(set)?,
            }),
            [set, id] => Ok(Self::Item {
                set: parse_set_segment(set)?,
                item: parse_id(id)?,
            }),
            [set, id, COPY_TO_SEGMENT, target] => Ok(Self::Copy {
                set: parse_set_segment(set)?,
                item: parse_id(id)?,
                target: parse_set_segment(target)?,
            }),
            _ => Err(LocatorParseError::UnrecognizedShape(normalized.to_string())),
        }
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Root => Ok(()),
            Self::Set { set } => write!(f, "{set}"),
            Self::Item { set, item } => write!(f, "{set}/{item}"),
            Self::Copy { set, item, target } => {
                write!(f, "{set}/{item}/{COPY_TO_SEGMENT}/{target}")
            }
            Self::PendingCopy { copy } => write!(f, "{RESERVED_COPIES_SEGMENT}/{copy}"),
        }
    }
}

fn parse_set_segment(segment: &str) -> Result<String, LocatorParseError> {
    validate_set_name(segment).map_err(|reason| LocatorParseError::InvalidSetSegment {
        segment: segment.to_string(),
        reason,
    })?;
    Ok(segment.to_string())
}

fn parse_id(segment: &str) -> Result<Uuid, LocatorParseError> {
    Uuid::parse_str(segment).map_err(|_| LocatorParseError::InvalidId(segment.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{Locator, LocatorParseError};
    use uuid::Uuid;

    fn roundtrip(locator: Locator) {
        let text = locator.to_string();
        let parsed = Locator::parse(&text).expect("canonical text should parse");
        assert_eq!(parsed, locator);
    }

    #[test]
    fn text_form_roundtrips_for_every_variant() {
        let item = Uuid::new_v4();
        roundtrip(Locator::Root);
        roundtrip(Locator::Set {
            set: "forms".to_string(),
        });
        roundtrip(Locator::Item {
            set: "forms".to_string(),
            item,
        });
        roundtrip(Locator::Copy {
            set: "forms".to_string(),
            item,
            target: "publishedForms".to_string(),
        });
        roundtrip(Locator::PendingCopy {
            copy: Uuid::new_v4(),
        });
    }

    #[test]
    fn parse_normalizes_slashes_and_whitespace() {
        assert_eq!(Locator::parse(""), Ok(Locator::Root));
        assert_eq!(Locator::parse("  /  "), Ok(Locator::Root));
        assert_eq!(
            Locator::parse("/forms/"),
            Ok(Locator::Set {
                set: "forms".to_string()
            })
        );
    }

    #[test]
    fn copies_segment_is_never_a_set() {
        let id = Uuid::new_v4();
        let parsed = Locator::parse(&format!("copies/{id}")).expect("pending copy should parse");
        assert_eq!(parsed, Locator::PendingCopy { copy: id });

        assert!(matches!(
            Locator::parse("copies"),
            Err(LocatorParseError::InvalidSetSegment { .. })
        ));
    }

    #[test]
    fn malformed_text_is_a_typed_error() {
        assert!(matches!(
            Locator::parse("forms/not-a-uuid"),
            Err(LocatorParseError::InvalidId(_))
        ));
        let id = Uuid::new_v4();
        assert!(matches!(
            Locator::parse(&format!("forms/{id}/unknown/publishedForms")),
            Err(LocatorParseError::UnrecognizedShape(_))
        ));
        assert!(matches!(
            Locator::parse(&format!("forms/{id}/copy-to/publishedForms/extra")),
            Err(LocatorParseError::UnrecognizedShape(_))
        ));
    }
}
