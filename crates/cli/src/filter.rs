//! Story selection by content type and full slug.

use sbtx_protocol::StoryListEntry;

/// Which stories of a space take part in an export.
///
/// Empty lists do not restrict. `content_types` never matches a story
/// without a content type, so a non-empty list excludes folders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoryFilter {
	pub content_types: Vec<String>,
	pub skip_stories: Vec<String>,
	pub only_stories: Vec<String>,
}

impl StoryFilter {
	pub fn accepts(&self, entry: &StoryListEntry) -> bool {
		if !self.content_types.is_empty() {
			let matches = entry
				.content_type
				.as_deref()
				.is_some_and(|content_type| self.content_types.iter().any(|t| t == content_type));
			if !matches {
				return false;
			}
		}
		if self.skip_stories.iter().any(|slug| *slug == entry.full_slug) {
			return false;
		}
		self.only_stories.is_empty() || self.only_stories.iter().any(|slug| *slug == entry.full_slug)
	}

	/// Keeps the accepted entries in their listing order.
	pub fn apply(&self, entries: Vec<StoryListEntry>) -> Vec<StoryListEntry> {
		entries.into_iter().filter(|entry| self.accepts(entry)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(full_slug: &str, content_type: Option<&str>) -> StoryListEntry {
		StoryListEntry {
			id: 1,
			name: full_slug.to_string(),
			slug: full_slug.rsplit('/').next().unwrap_or(full_slug).to_string(),
			full_slug: full_slug.to_string(),
			content_type: content_type.map(str::to_string),
			is_folder: content_type.is_none(),
		}
	}

	#[test]
	fn empty_filter_accepts_everything() {
		let filter = StoryFilter::default();
		assert!(filter.accepts(&entry("home", Some("page"))));
		assert!(filter.accepts(&entry("blog", None)));
	}

	#[test]
	fn content_types_exclude_folders() {
		let filter = StoryFilter {
			content_types: vec!["page".into(), "news-article".into()],
			..Default::default()
		};
		assert!(filter.accepts(&entry("home", Some("page"))));
		assert!(filter.accepts(&entry("news/launch", Some("news-article"))));
		assert!(!filter.accepts(&entry("blog/post", Some("post"))));
		assert!(!filter.accepts(&entry("blog", None)));
	}

	#[test]
	fn skip_wins_over_only() {
		let filter = StoryFilter {
			skip_stories: vec!["home".into()],
			only_stories: vec!["home".into(), "about-us".into()],
			..Default::default()
		};
		assert!(!filter.accepts(&entry("home", Some("page"))));
		assert!(filter.accepts(&entry("about-us", Some("page"))));
		assert!(!filter.accepts(&entry("services", Some("page"))));
	}

	#[test]
	fn slugs_match_exactly() {
		let filter = StoryFilter {
			only_stories: vec!["blog".into()],
			..Default::default()
		};
		assert!(!filter.accepts(&entry("blog/first-post", Some("post"))));
		assert_eq!(
			filter
				.apply(vec![entry("blog", None), entry("blog/first-post", Some("post"))])
				.len(),
			1
		);
	}
}
