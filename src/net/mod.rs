//! Networking modules for the authenticated HTTP pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` performs the outbound calls (bearer attachment, GET caching,
//! failure classification), `cache` holds the time-boxed response cache,
//! `error` defines the failure taxonomy, and `types` defines the shared
//! wire schema.

pub mod cache;
pub mod error;
pub mod http;
pub mod types;
