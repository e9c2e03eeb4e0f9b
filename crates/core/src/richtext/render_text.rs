//! HTML-to-text rendering for plain text output.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use crate::richtext::entities::{Preserved, collapse_spaces, decode_html_entities, tidy_lines, verbatim_text};
use crate::richtext::html::{PRE_RE, unwrap_list_paragraphs};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("TAG_RE should compile"));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?is)<a\s[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#).expect("LINK_RE should compile"));
static BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<blockquote[^>]*>(.*?)</blockquote>").expect("BLOCKQUOTE_RE should compile"));
static OL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?is)<ol(?:\s+start="(\d+)")?[^>]*>(.*?)</ol>"#).expect("OL_RE should compile"));
static BLOCK_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)</?(p|div|h[1-6]|ul|ol|blockquote|pre|hr|table)\b[^>]*>").expect("BLOCK_RE should compile"));
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<(br|tr)\b[^>]*>").expect("LINE_RE should compile"));
static LI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li\b[^>]*>").expect("LI_RE should compile"));

/// Converts HTML into plain text without word wrapping.
///
/// Block elements are separated by blank lines. Bullet items start with `* `,
/// ordered items are numbered from the list's `start`, quoted lines start
/// with `> ` and links whose target differs from their text keep it as
/// `text [href]`. Headings keep their case and code blocks their whitespace.
pub(crate) fn html_to_text(html: &str) -> String {
	let mut preserved = Preserved::default();

	let result = unwrap_list_paragraphs(html);
	let result = BLOCKQUOTE_RE.replace_all(&result, |caps: &Captures| {
		let quoted = quote_lines(&html_to_text(&caps[1]));
		format!("\n\n{}\n\n", preserved.hold(quoted))
	});
	let result = PRE_RE.replace_all(&result, |caps: &Captures| {
		let code = verbatim_text(&caps[1]);
		format!("\n\n{}\n\n", preserved.hold(code))
	});
	let result = LINK_RE.replace_all(&result, |caps: &Captures| {
		let text = TAG_RE.replace_all(&caps[2], "").to_string();
		let href = &caps[1];
		if href.is_empty() || text.trim() == href {
			text
		} else {
			format!("{text} [{href}]")
		}
	});
	let result = OL_RE.replace_all(&result, number_list_items);
	let result = LI_RE.replace_all(&result, "\n* ");
	let result = BLOCK_RE.replace_all(&result, "\n\n");
	let result = LINE_RE.replace_all(&result, "\n");
	let result = TAG_RE.replace_all(&result, "");
	let result = decode_html_entities(&result);
	let result = collapse_spaces(&result);

	preserved.restore(&tidy_lines(result.lines()))
}

fn quote_lines(text: &str) -> String {
	text.lines()
		.map(|line| if line.is_empty() { ">".to_string() } else { format!("> {line}") })
		.collect::<Vec<_>>()
		.join("\n")
}

fn number_list_items(caps: &Captures) -> String {
	let mut n: u64 = caps.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(1);
	let items = LI_RE.replace_all(&caps[2], |_: &Captures| {
		let marker = format!("\n{n}. ");
		n += 1;
		marker
	});
	format!("\n\n{items}\n\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn converts_html_to_text() {
		let html = "<p>Hello <strong>World</strong>!</p>";
		assert_eq!(html_to_text(html), "Hello World!");
	}

	#[test]
	fn separates_blocks_and_lists() {
		let html = "<h2>Title</h2><p>Intro</p><ul><li><p>One</p></li><li><p>Two</p></li></ul><p>a<br />b</p>";
		assert_eq!(html_to_text(html), "Title\n\nIntro\n\n* One\n* Two\n\na\nb");
	}

	#[test]
	fn keeps_link_targets() {
		let html = "<p>See <a href=\"https://example.com\">the docs</a> or <a href=\"https://x.io\">https://x.io</a></p>";
		assert_eq!(html_to_text(html), "See the docs [https://example.com] or https://x.io");
	}

	#[test]
	fn numbers_ordered_lists() {
		let html = "<ol><li><p>First</p></li><li><p>Second</p></li></ol><ol start=\"4\"><li>Fourth</li></ol><ul><li>Loose</li></ul>";
		assert_eq!(html_to_text(html), "1. First\n2. Second\n\n4. Fourth\n\n* Loose");
	}

	#[test]
	fn quotes_blockquote_lines() {
		let html = "<p>Before</p><blockquote><p>Quoted <em>text</em></p><p>More</p></blockquote><p>After</p>";
		assert_eq!(html_to_text(html), "Before\n\n> Quoted text\n>\n> More\n\nAfter");
	}

	#[test]
	fn keeps_code_block_whitespace() {
		let html = "<p>Run:</p><pre><code>fn a() {\n    b(1,  2);\n\n\n}</code></pre><p>Done</p>";
		assert_eq!(html_to_text(html), "Run:\n\nfn a() {\n    b(1,  2);\n\n\n}\n\nDone");
	}

	#[test]
	fn headings_keep_their_case() {
		assert_eq!(html_to_text("<h1>Getting started</h1><h3>Step one</h3>"), "Getting started\n\nStep one");
	}

	#[test]
	fn decodes_escaped_text() {
		assert_eq!(html_to_text("<p>1 &lt; 2 &amp;&amp; &quot;ok&quot;</p>"), "1 < 2 && \"ok\"");
	}
}
