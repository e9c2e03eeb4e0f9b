//! Story records returned by the `spaces/{space_id}/stories` endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entry of the paginated story listing.
///
/// The listing omits the content tree; it carries just enough to filter by
/// content type and slug before the full record is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryListEntry {
	pub id: u64,
	pub name: String,
	pub slug: String,
	pub full_slug: String,
	/// Component name of the story's root node. `null` for folders.
	#[serde(default)]
	pub content_type: Option<String>,
	#[serde(default)]
	pub is_folder: bool,
}

/// Full story record including its content tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
	pub id: u64,
	pub name: String,
	pub slug: String,
	pub full_slug: String,
	#[serde(default)]
	pub is_folder: bool,
	/// Root content node. Key order is preserved as delivered.
	#[serde(default)]
	pub content: Value,
}

/// Response body of `GET spaces/{space_id}/stories/{story_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryEnvelope {
	pub story: Story,
}
