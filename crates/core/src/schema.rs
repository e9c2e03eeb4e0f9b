//! Component schema index.
//!
//! The index is built once per run from the component definitions of a space
//! and is read-only afterwards. Lookups return an explicit [`Result`] so an
//! unresolved component reference can abort the run with a useful message.

use std::collections::HashMap;

use sbtx_protocol::{Component, ComponentField};
use tracing::warn;

use crate::error::{FlattenError, Result};

/// Field kinds relevant to flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	/// Single-line text (`text`).
	PlainText,
	/// Multi-line text (`textarea`).
	MultilineText,
	/// Structured rich-text document (`richtext`).
	RichStructured,
	/// Table with header and body rows (`table`).
	Table,
	/// Any other field type. Carries the wire tag for diagnostics.
	Ignored(String),
}

impl FieldKind {
	/// Maps a wire type tag onto a field kind.
	pub fn from_type_tag(tag: &str) -> Self {
		match tag {
			"text" => FieldKind::PlainText,
			"textarea" => FieldKind::MultilineText,
			"richtext" => FieldKind::RichStructured,
			"table" => FieldKind::Table,
			other => FieldKind::Ignored(other.to_string()),
		}
	}

	/// Whether fields of this kind produce text output.
	pub fn is_rendered(&self) -> bool {
		!matches!(self, FieldKind::Ignored(_))
	}
}

/// Schema of a single component field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
	pub kind: FieldKind,
	pub translatable: bool,
	pub display_label: Option<String>,
}

impl FieldDefinition {
	/// Path label for this field: the display label, else `key` with its
	/// first character uppercased.
	pub fn label(&self, key: &str) -> String {
		match self.display_label.as_deref() {
			Some(label) if !label.is_empty() => label.to_string(),
			_ => capitalize_first(key),
		}
	}
}

impl From<ComponentField> for FieldDefinition {
	fn from(field: ComponentField) -> Self {
		Self {
			kind: FieldKind::from_type_tag(&field.field_type),
			translatable: field.translatable.unwrap_or(false),
			display_label: field.display_name,
		}
	}
}

/// Field layout of one component (block type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSchema {
	pub name: String,
	pub display_name: String,
	pub fields: HashMap<String, FieldDefinition>,
}

impl ComponentSchema {
	pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
		self.fields.get(key)
	}
}

impl From<Component> for ComponentSchema {
	fn from(component: Component) -> Self {
		let display_name = [component.real_name, component.display_name]
			.into_iter()
			.flatten()
			.find(|name| !name.is_empty())
			.unwrap_or_else(|| component.name.clone());

		Self {
			name: component.name,
			display_name,
			fields: component.schema.into_iter().map(|(key, field)| (key, field.into())).collect(),
		}
	}
}

/// Immutable lookup from component name to [`ComponentSchema`].
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
	components: HashMap<String, ComponentSchema>,
}

impl SchemaIndex {
	/// Builds the index. When two records share a name the later one wins.
	pub fn build<I>(records: I) -> Self
	where
		I: IntoIterator<Item = ComponentSchema>,
	{
		let mut components = HashMap::new();
		for schema in records {
			if components.contains_key(&schema.name) {
				warn!(target = "sbtx", component = %schema.name, "duplicate component definition, keeping the last one");
			}
			components.insert(schema.name.clone(), schema);
		}
		Self { components }
	}

	/// Builds the index straight from wire records.
	pub fn from_components<I>(components: I) -> Self
	where
		I: IntoIterator<Item = Component>,
	{
		Self::build(components.into_iter().map(ComponentSchema::from))
	}

	/// Resolves `name`, failing with [`FlattenError::SchemaResolution`].
	///
	/// `path` is only used to locate the offending node in the error message.
	pub fn lookup(&self, name: &str, path: &str) -> Result<&ComponentSchema> {
		self.components.get(name).ok_or_else(|| FlattenError::SchemaResolution {
			component: name.to_string(),
			path: path.to_string(),
		})
	}

	pub fn get(&self, name: &str) -> Option<&ComponentSchema> {
		self.components.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.components.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.components.len()
	}

	pub fn is_empty(&self) -> bool {
		self.components.is_empty()
	}
}

fn capitalize_first(value: &str) -> String {
	let mut chars = value.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
