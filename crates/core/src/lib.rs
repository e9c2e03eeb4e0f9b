//! Schema-driven flattening of Storyblok content trees.
//!
//! A story's content is a tree of JSON nodes. Nodes carrying a `component`
//! key are described by a component schema which tells, per field, whether it
//! holds text, rich text, a table or something else, and whether it is meant
//! to be translated. This crate walks such trees and turns the textual fields
//! into an ordered list of plain text blocks, each tagged with a
//! human-readable field path such as `Body > 0 > Teaser > Headline`.
//!
//! # Example
//!
//! ```ignore
//! use sbtx::{FlattenOptions, Flattener, SchemaIndex};
//!
//! let index = SchemaIndex::from_components(components);
//! let flattener = Flattener::new(&index, FlattenOptions::default());
//! let blocks = flattener.flatten(&story.content)?;
//! ```
//!
//! # Modules
//!
//! - [`schema`]: component schema index and field kinds
//! - [`path`]: field paths
//! - [`flatten`]: the tree walker
//! - [`table`]: table field rendering
//! - [`richtext`]: rich-text rendering adapters
//! - [`story`]: story documents and artifact names

pub mod error;
pub mod flatten;
pub mod path;
pub mod richtext;
pub mod schema;
pub mod story;
pub mod table;

pub use error::{FlattenError, RenderError, Result};
pub use flatten::{Block, FlattenOptions, Flattener};
pub use path::{FieldPath, PathSegment};
pub use richtext::{RichTextMode, RichTextRenderer, StoryblokRichText};
pub use schema::{ComponentSchema, FieldDefinition, FieldKind, SchemaIndex};
pub use story::{artifact_file_name, render_story};
