//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `linkset_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use linkset_core::{Locator, Store};

fn main() {
    let store = Store::new();
    for set in ["forms", "publishedForms"] {
        if let Err(err) = store.register_set(set) {
            eprintln!("linkset_core register_set failed: {err}");
            std::process::exit(1);
        }
    }

    let root_links = store
        .resolve(&Locator::Root)
        .found()
        .map(|repr| repr.links.len())
        .unwrap_or(0);

    println!("linkset_core ping={}", linkset_core::ping());
    println!("linkset_core version={}", linkset_core::core_version());
    println!("linkset_core root_links={root_links}");
}
