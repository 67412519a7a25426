//! Refsheet — umbrella crate.
//!
//! Re-exports the refsheet components for convenience. Enable the `cli`
//! feature to pull in the command-line driver as a library.

pub use refsheet_content as content;
pub use refsheet_core as core;

#[cfg(feature = "cli")]
pub use refsheet_cli as cli;
