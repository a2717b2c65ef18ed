//! Core engine for LinkSet, a link-driven hypermedia resource store.
//! This crate is the single source of truth for link synthesis and
//! lifecycle invariants; transport and wire encoding live outside.

pub mod logging;
pub mod model;
pub mod repr;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::item::{Item, ItemId, ItemState};
pub use model::link::{copy_to_relation, Link, LinkMethod};
pub use model::locator::{Locator, LocatorParseError};
pub use model::payload::Payload;
pub use model::pending_copy::{CopyId, CopyState, CopyStateError, PendingCopy};
pub use model::representation::{Representation, ReprStatus};
pub use model::set::{validate_set_name, SetNameError};
pub use service::link_service::LinkService;
pub use store::{Resolution, Store, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
