//! Schema-driven flattening of content trees.
//!
//! The [`Flattener`] walks a content tree depth-first in key order. Mappings
//! carrying a `component` key are classified against the [`SchemaIndex`];
//! text, rich-text and table fields are rendered into [`Block`]s tagged with
//! the [`FieldPath`] they were found at. Everything else is only traversed.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::Result;
use crate::path::FieldPath;
use crate::richtext::{RichTextMode, RichTextRenderer, StoryblokRichText};
use crate::schema::{ComponentSchema, FieldDefinition, FieldKind, SchemaIndex};
use crate::table::render_table;

/// Reserved key naming the component of a content node.
pub const COMPONENT_KEY: &str = "component";

/// Separator line below a field path header.
pub const PATH_SEPARATOR_LINE: &str = "------------------------------";

/// Flattening switches. All options are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlattenOptions {
	/// Skip fields whose schema marks them as not translatable.
	pub translatable_only: bool,
	/// Prefix every block with a `Field: "<path>"` header.
	pub include_field_paths: bool,
	pub rich_text_mode: RichTextMode,
}

/// Rendered content of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
	pub path: FieldPath,
	pub content: String,
}

impl Block {
	/// Text of the block, with or without its path header.
	pub fn render(&self, include_field_path: bool) -> String {
		if include_field_path {
			format!("Field: \"{}\"\n{PATH_SEPARATOR_LINE}\n{}", self.path, self.content)
		} else {
			self.content.clone()
		}
	}
}

/// Walks content trees against a schema index.
///
/// A flattener borrows the index and a rich-text renderer; it holds no other
/// state, so one instance can flatten any number of roots.
pub struct Flattener<'a> {
	index: &'a SchemaIndex,
	renderer: &'a dyn RichTextRenderer,
	options: FlattenOptions,
}

impl<'a> Flattener<'a> {
	/// Creates a flattener using the built-in rich-text renderer.
	pub fn new(index: &'a SchemaIndex, options: FlattenOptions) -> Self {
		Self::with_renderer(index, &StoryblokRichText, options)
	}

	pub fn with_renderer(index: &'a SchemaIndex, renderer: &'a dyn RichTextRenderer, options: FlattenOptions) -> Self {
		Self { index, renderer, options }
	}

	pub fn options(&self) -> FlattenOptions {
		self.options
	}

	/// Flattens `root` into text blocks formatted according to the options.
	///
	/// Nothing is returned for the root if any component reference in it
	/// cannot be resolved.
	pub fn flatten(&self, root: &Value) -> Result<Vec<String>> {
		let blocks = self.blocks(root)?;
		Ok(blocks.iter().map(|block| block.render(self.options.include_field_paths)).collect())
	}

	/// Flattens `root` into path-tagged blocks.
	pub fn blocks(&self, root: &Value) -> Result<Vec<Block>> {
		let mut out = Vec::new();
		self.flatten_into(root, &FieldPath::root(), &mut out)?;
		Ok(out)
	}

	/// Appends the blocks of `node`, found at `path`, to `out`.
	pub fn flatten_into(&self, node: &Value, path: &FieldPath, out: &mut Vec<Block>) -> Result<()> {
		let Value::Object(fields) = node else {
			return Ok(());
		};

		let schema = match fields.get(COMPONENT_KEY) {
			Some(reference) => Some(self.resolve(reference, path)?),
			None => None,
		};

		let node_path = match schema {
			// The root component is implied by the story and never prefixed.
			Some(schema) if !path.is_empty() => path.with_label(&schema.display_name),
			_ => path.clone(),
		};

		self.flatten_fields(fields, schema, &node_path, out)
	}

	fn resolve(&self, reference: &Value, path: &FieldPath) -> Result<&'a ComponentSchema> {
		let location = path.to_string();
		match reference {
			Value::String(name) => self.index.lookup(name, &location),
			other => self.index.lookup(&other.to_string(), &location),
		}
	}

	fn flatten_fields(&self, fields: &Map<String, Value>, schema: Option<&ComponentSchema>, path: &FieldPath, out: &mut Vec<Block>) -> Result<()> {
		for (key, value) in fields {
			let mut field_path = path.clone();
			let mut descend = true;

			if let Some(field) = schema.and_then(|schema| schema.field(key)) {
				field_path = path.with_label(field.label(key));

				if field.kind.is_rendered() && self.options.translatable_only && !field.translatable {
					debug!(target = "sbtx", path = %field_path, "skipping non-translatable field");
					continue;
				}

				let content = self.render_field(field, value)?;
				if field.kind == FieldKind::Table {
					descend = false;
				}

				if !content.trim().is_empty() {
					trace!(target = "sbtx", path = %field_path, "emit block");
					out.push(Block {
						path: field_path.clone(),
						content,
					});
				}
			}

			if !descend {
				continue;
			}

			match value {
				Value::Array(items) => {
					for (index, item) in items.iter().enumerate() {
						self.flatten_into(item, &field_path.with_index(index), out)?;
					}
				}
				Value::Object(_) => self.flatten_into(value, &field_path, out)?,
				_ => {}
			}
		}

		Ok(())
	}

	fn render_field(&self, field: &FieldDefinition, value: &Value) -> Result<String> {
		let content = match &field.kind {
			FieldKind::PlainText | FieldKind::MultilineText => match value {
				Value::String(text) if !text.is_empty() => text.clone(),
				_ => String::new(),
			},
			FieldKind::RichStructured => match value {
				Value::Object(_) => self.renderer.render(value, self.options.rich_text_mode)?,
				_ => String::new(),
			},
			FieldKind::Table => render_table(value)?,
			FieldKind::Ignored(_) => String::new(),
		};
		Ok(content)
	}
}
