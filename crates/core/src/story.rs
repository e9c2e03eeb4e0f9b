//! Text document of a single story.

use sbtx_protocol::Story;

use crate::error::Result;
use crate::flatten::Flattener;

/// Builds the text artifact of `story`: a metadata header followed, for
/// non-folder stories, by the flattened content blocks.
pub fn render_story(story: &Story, flattener: &Flattener<'_>) -> Result<String> {
	let mut lines = vec![
		"Metadata:".to_string(),
		"=========".to_string(),
		format!("Slug: \"{}\"", story.slug),
		format!("Name: \"{}\"", story.name),
	];

	if !story.is_folder {
		lines.push("\nContent:".to_string());
		lines.push("==========".to_string());
		for block in flattener.flatten(&story.content)? {
			lines.push(format!("\n{block}"));
		}
	}

	Ok(lines.join("\n"))
}

/// File name of a story's artifact: the full slug with `/` replaced by `_`.
pub fn artifact_file_name(full_slug: &str) -> String {
	format!("{}.txt", full_slug.replace('/', "_"))
}
