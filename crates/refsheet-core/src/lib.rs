//! Refsheet Core — shared error types and utilities.
//!
//! This crate provides the foundational types used across all refsheet
//! crates. It has no internal refsheet dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: File-stem and ID utilities

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::{id_from_path, normalize_id};
