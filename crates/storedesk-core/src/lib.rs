//! # storedesk-core
//!
//! Core types, settings, and error types for the storedesk dashboard.
//! This crate has no dependency on the other storedesk crates and provides
//! the foundation they build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Dashboard settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML/JSON files and the environment
//! - [`logging`] - Tracing-based logging integration
//! - [`utils`] - Text helpers (search folding, HTML escaping)

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{StoreDeskError, StoreDeskResult, ValidationError};
pub use settings::{Settings, SETTINGS};
