//! Resolved export settings.

use std::path::PathBuf;

use sbtx::FlattenOptions;

use crate::cli::Cli;
use crate::filter::StoryFilter;
use crate::types::{Region, RichTextOutput};

/// Items requested per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Clone, Debug)]
pub struct ExportConfig {
	pub token: String,
	pub space_id: u64,
	pub region: Region,
	pub api_base_url: String,
	pub page_size: usize,
	pub rich_text_output: RichTextOutput,
	pub flatten: FlattenOptions,
	pub filter: StoryFilter,
	pub output_dir: PathBuf,
	pub force: bool,
}

impl From<Cli> for ExportConfig {
	fn from(cli: Cli) -> Self {
		let api_base_url = cli
			.api_url
			.filter(|url| !url.trim().is_empty())
			.unwrap_or_else(|| cli.region.api_base_url().to_string());

		Self {
			token: cli.token,
			space_id: cli.space,
			region: cli.region,
			api_base_url,
			page_size: DEFAULT_PAGE_SIZE,
			rich_text_output: cli.rich_text_output,
			flatten: FlattenOptions {
				translatable_only: cli.only_translatable,
				include_field_paths: cli.include_field_paths,
				rich_text_mode: cli.rich_text_output.into(),
			},
			filter: StoryFilter {
				content_types: non_empty(cli.content_types),
				skip_stories: non_empty(cli.skip_stories),
				only_stories: non_empty(cli.only_stories),
			},
			output_dir: cli.output_dir,
			force: cli.force,
		}
	}
}

/// Drops blanks left by stray commas (`--skip-stories a,,b`).
fn non_empty(values: Vec<String>) -> Vec<String> {
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.collect()
}
