//! Storyblok text export.
//!
//! Fetches the stories and component definitions of a space from the
//! Management API and writes the textual content of every selected story
//! to its own file.

pub mod artifacts;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod logging;
pub mod report;
pub mod types;

pub use error::{ExportError, Result};
