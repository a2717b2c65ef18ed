//! Link-follow dispatch over one store.
//!
//! # Responsibility
//! - Turn a link plus optional body into the single store operation
//!   the link permits.
//! - Map every refusal into the not-found resolution instead of an
//!   error, keeping the cause available for diagnostics.
//!
//! # Invariants
//! - Body presence must match the link's `requires_body`, except on
//!   execute links where a body is an optional command override.
//! - No dispatch path mutates state on a read-method link.

use crate::model::link::{Link, LinkMethod};
use crate::model::locator::Locator;
use crate::model::payload::Payload;
use crate::model::representation::Representation;
use crate::store::{Resolution, Store, StoreError, StoreResult};
use log::debug;

/// Follow entry point: the engine-side counterpart of "the client
/// clicked this link".
pub struct LinkService<'s> {
    store: &'s Store,
}

impl<'s> LinkService<'s> {
    pub fn new(store: &'s Store) -> Self {
        Self { store }
    }

    /// Resolves a locator; see [`Store::resolve`].
    pub fn resolve(&self, locator: &Locator) -> Resolution {
        self.store.resolve(locator)
    }

    /// Follows one link, producing the next representation.
    ///
    /// A link is a capability description, not proof of existence: a
    /// link issued earlier may legitimately resolve to not-found once
    /// its referent's lifecycle has advanced.
    pub fn follow(&self, link: &Link, body: Option<&Payload>) -> Resolution {
        let outcome = self.dispatch(link, body);
        if let Err(cause) = &outcome {
            debug!(
                "event=follow_refused module=service rel={} invalid_transition={} cause={cause}",
                link.rel,
                cause.is_invalid_transition()
            );
        }
        Resolution::from_result(outcome)
    }

    fn dispatch(&self, link: &Link, body: Option<&Payload>) -> StoreResult<Representation> {
        if link.requires_body && body.is_none() {
            return Err(StoreError::MissingBody {
                rel: link.rel.clone(),
            });
        }
        if !link.requires_body && body.is_some() && link.method != LinkMethod::Execute {
            return Err(StoreError::MethodMismatch {
                rel: link.rel.clone(),
                method: link.method,
            });
        }

        match (link.method, &link.target) {
            (LinkMethod::Read, target) => self.store.resolve_strict(target),
            (LinkMethod::Create, Locator::Set { set }) => match body {
                Some(payload) => self.store.create_item(set, payload.clone()),
                None => Err(StoreError::MissingBody {
                    rel: link.rel.clone(),
                }),
            },
            (LinkMethod::Mutate, Locator::Item { set, item }) => {
                if link.requires_body {
                    match body {
                        Some(payload) => self.store.update_item(set, *item, payload.clone()),
                        None => Err(StoreError::MissingBody {
                            rel: link.rel.clone(),
                        }),
                    }
                } else {
                    self.store.delete_item(set, *item)
                }
            }
            (LinkMethod::Execute, Locator::Copy { set, item, target }) => {
                self.store.initiate_copy(set, *item, target)
            }
            (LinkMethod::Execute, Locator::PendingCopy { copy }) => {
                self.store.execute_copy(*copy, body.cloned())
            }
            (method, _) => Err(StoreError::MethodMismatch {
                rel: link.rel.clone(),
                method,
            }),
        }
    }
}
