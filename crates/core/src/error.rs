//! Error types for schema resolution and rendering.

use thiserror::Error;

/// Fatal conditions raised while flattening a content tree.
///
/// Degenerate content (empty strings, scalars where a container was expected,
/// keys unknown to the schema) never produces an error.
#[derive(Debug, Error)]
pub enum FlattenError {
	/// A content node names a component absent from the schema index.
	#[error("component \"{component}\" not found (at \"{path}\")")]
	SchemaResolution { component: String, path: String },

	#[error(transparent)]
	Render(#[from] RenderError),
}

/// Failure of a rich-text or table rendering adapter.
#[derive(Debug, Error)]
pub enum RenderError {
	#[error("malformed table: {0}")]
	MalformedTable(String),

	#[error("failed to serialize rich text document: {0}")]
	Serialize(#[from] serde_json::Error),

	#[error("failed to write markup: {0}")]
	Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, FlattenError>;
