//! # storedesk
//!
//! A store administration dashboard built around a dynamic form engine.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `storedesk` to get everything, or on the individual
//! crates for finer-grained control.

/// Core types, settings, logging, and error types.
pub use storedesk_core as core;

/// The dynamic form engine: schemas, value bags, validation, and controls.
pub use storedesk_forms as forms;

/// Dashboard pages, list views, pagination, and mock data.
#[cfg(feature = "admin")]
pub use storedesk_admin as admin;

/// Management commands (CLI).
#[cfg(feature = "cli")]
pub use storedesk_cli as cli;

/// Third-party re-exports.
pub use serde_json;
pub use tracing;
