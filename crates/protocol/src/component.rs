//! Component definitions returned by `spaces/{space_id}/components`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A component (block type) definition of a space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
	#[serde(default)]
	pub id: Option<u64>,
	/// Technical name referenced by the `component` key of content nodes.
	pub name: String,
	#[serde(default)]
	pub display_name: Option<String>,
	/// Human name as shown in the editor.
	#[serde(default)]
	pub real_name: Option<String>,
	/// Field key to field definition.
	#[serde(default)]
	pub schema: BTreeMap<String, ComponentField>,
}

/// Definition of a single field inside a component schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentField {
	/// Field type tag such as `text`, `textarea`, `richtext`, `table` or `bloks`.
	#[serde(rename = "type", default)]
	pub field_type: String,
	#[serde(default)]
	pub translatable: Option<bool>,
	#[serde(default)]
	pub display_name: Option<String>,
}
