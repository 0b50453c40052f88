//! Utility functions for storedesk.
//!
//! - [`text`]: string helpers (search folding, HTML escaping, truncation).

pub mod text;
