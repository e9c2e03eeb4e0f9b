//! Value types shared by argument parsing and configuration.

use clap::ValueEnum;
use sbtx::RichTextMode;

/// Storyblok data center hosting a space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Region {
	/// Europe (default)
	#[default]
	Eu,
	/// United States
	Us,
	/// Australia
	Ap,
	/// Canada
	Ca,
	/// China
	Cn,
}

impl Region {
	/// Management API base URL of the region.
	pub fn api_base_url(self) -> &'static str {
		match self {
			Region::Eu => "https://mapi.storyblok.com/v1",
			Region::Us => "https://api-us.storyblok.com/v1",
			Region::Ap => "https://api-ap.storyblok.com/v1",
			Region::Ca => "https://api-ca.storyblok.com/v1",
			Region::Cn => "https://app.storyblokchina.cn/v1",
		}
	}
}

impl std::fmt::Display for Region {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Region::Eu => write!(f, "eu"),
			Region::Us => write!(f, "us"),
			Region::Ap => write!(f, "ap"),
			Region::Ca => write!(f, "ca"),
			Region::Cn => write!(f, "cn"),
		}
	}
}

/// Output format for rich-text fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RichTextOutput {
	/// Plain text (default)
	#[default]
	Text,
	/// Original JSON
	Json,
	/// HTML
	Html,
	/// Markdown
	Markdown,
}

impl From<RichTextOutput> for RichTextMode {
	fn from(output: RichTextOutput) -> Self {
		match output {
			RichTextOutput::Text => RichTextMode::PlainText,
			RichTextOutput::Json => RichTextMode::OriginalStructure,
			RichTextOutput::Html => RichTextMode::Markup,
			RichTextOutput::Markdown => RichTextMode::LightweightMarkup,
		}
	}
}

impl std::fmt::Display for RichTextOutput {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RichTextOutput::Text => write!(f, "text"),
			RichTextOutput::Json => write!(f, "json"),
			RichTextOutput::Html => write!(f, "html"),
			RichTextOutput::Markdown => write!(f, "markdown"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn regions_map_to_api_hosts() {
		assert_eq!(Region::default().api_base_url(), "https://mapi.storyblok.com/v1");
		assert_eq!(Region::Us.api_base_url(), "https://api-us.storyblok.com/v1");
		assert_eq!(Region::Cn.to_string(), "cn");
	}

	#[test]
	fn rich_text_output_maps_to_mode() {
		assert_eq!(RichTextMode::from(RichTextOutput::default()), RichTextMode::PlainText);
		assert_eq!(RichTextMode::from(RichTextOutput::Json), RichTextMode::OriginalStructure);
		assert_eq!(RichTextMode::from(RichTextOutput::Html), RichTextMode::Markup);
		assert_eq!(RichTextMode::from(RichTextOutput::Markdown), RichTextMode::LightweightMarkup);
	}
}
