//! Engine-facing services.
//!
//! # Responsibility
//! - Orchestrate store operations behind the link-follow entry point.
//! - Keep transport adapters decoupled from store internals.

pub mod link_service;
