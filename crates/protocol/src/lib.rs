//! Wire types for the Storyblok Management API.
//!
//! This crate contains the serde types used when reading stories and
//! component definitions from the Management API. These types represent the
//! "protocol layer": the shapes of data as they appear on the wire.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * Lenient: Optional or nullable wire fields default instead of failing
//! * Stable: Changes only when the API response shapes change
//!
//! The schema index and flattening engine are built on top of these types in
//! `sbtx-core`.

pub mod component;
pub mod story;

pub use component::*;
pub use story::*;
