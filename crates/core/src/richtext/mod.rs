//! Rich-text rendering adapters.
//!
//! Rich-text fields hold a structured document tree. The flattener hands
//! such documents to a [`RichTextRenderer`] together with the selected
//! [`RichTextMode`]; [`StoryblokRichText`] is the built-in implementation.
//! Every mode except [`RichTextMode::OriginalStructure`] goes through HTML
//! first and converts from there.

mod entities;
mod html;
mod pretty;
mod render_markdown;
mod render_text;

use std::fmt;

use serde_json::Value;

use crate::error::RenderError;

/// Output representation for rich-text fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RichTextMode {
	/// Plain text without markup.
	#[default]
	PlainText,
	/// The document tree as pretty-printed JSON.
	OriginalStructure,
	/// Indented HTML.
	Markup,
	/// Markdown.
	LightweightMarkup,
}

impl fmt::Display for RichTextMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			RichTextMode::PlainText => write!(f, "plain text"),
			RichTextMode::OriginalStructure => write!(f, "original JSON"),
			RichTextMode::Markup => write!(f, "HTML"),
			RichTextMode::LightweightMarkup => write!(f, "markdown"),
		}
	}
}

/// Converts a rich-text document into text.
///
/// Implementations must be deterministic for a given document and mode and
/// must not modify the document.
pub trait RichTextRenderer {
	fn render(&self, document: &Value, mode: RichTextMode) -> Result<String, RenderError>;
}

/// Renderer for Storyblok rich-text documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoryblokRichText;

impl RichTextRenderer for StoryblokRichText {
	fn render(&self, document: &Value, mode: RichTextMode) -> Result<String, RenderError> {
		let rendered = match mode {
			RichTextMode::OriginalStructure => serde_json::to_string_pretty(document)?,
			RichTextMode::Markup => pretty::prettify_html(&html::document_to_html(document)?),
			RichTextMode::PlainText => render_text::html_to_text(&html::document_to_html(document)?),
			RichTextMode::LightweightMarkup => render_markdown::html_to_markdown(&html::document_to_html(document)?),
		};
		Ok(rendered)
	}
}
