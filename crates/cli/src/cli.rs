use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::types::{Region, RichTextOutput};

pub const DEFAULT_OUTPUT_DIR: &str = "./.output";

#[derive(Parser, Debug)]
#[command(name = "storyblok-text-export")]
#[command(about = "Export the text content of Storyblok stories, one text file per story")]
#[command(version)]
pub struct Cli {
	/// Personal OAuth access token of a Storyblok user (NOT the access token of a space)
	#[arg(long, env = "STORYBLOK_OAUTH_TOKEN", hide_env_values = true)]
	pub token: String,

	/// ID of the space to export
	#[arg(long, env = "STORYBLOK_SPACE_ID")]
	pub space: u64,

	/// Region of the space
	#[arg(long, env = "STORYBLOK_REGION", value_enum, default_value_t = Region::Eu)]
	pub region: Region,

	/// Format of rich text fields
	#[arg(long, value_enum, default_value_t = RichTextOutput::Text)]
	pub rich_text_output: RichTextOutput,

	/// Only export fields marked as translatable
	#[arg(long)]
	pub only_translatable: bool,

	/// Prefix every field with its path of component and field names
	#[arg(long)]
	pub include_field_paths: bool,

	/// Comma separated content types to export (defaults to all)
	#[arg(long, value_delimiter = ',', value_name = "TYPES")]
	pub content_types: Vec<String>,

	/// Comma separated full slugs of stories to skip
	#[arg(long, value_delimiter = ',', value_name = "SLUGS")]
	pub skip_stories: Vec<String>,

	/// Comma separated full slugs of the only stories to export
	#[arg(long, value_delimiter = ',', value_name = "SLUGS")]
	pub only_stories: Vec<String>,

	/// Directory to write the export to (fails if it exists, see --force)
	#[arg(long, default_value = DEFAULT_OUTPUT_DIR, value_name = "DIR")]
	pub output_dir: PathBuf,

	/// Delete and recreate an existing output directory
	#[arg(long)]
	pub force: bool,

	/// Increase verbosity (-v per story details, -vv trace)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,

	/// Management API base URL (overrides the region)
	#[arg(long, env = "STORYBLOK_API_URL", hide = true)]
	pub api_url: Option<String>,
}
