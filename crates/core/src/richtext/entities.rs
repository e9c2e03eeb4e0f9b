//! Shared escaping and whitespace helpers for the markup renderers.

use std::sync::LazyLock;

use regex_lite::Regex;

static MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").expect("MULTI_SPACE regex should compile"));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("ANY_TAG regex should compile"));

const HOLD_OPEN: char = '\u{E000}';
const HOLD_CLOSE: char = '\u{E001}';

/// Text set aside while the surrounding markup is normalised.
///
/// [`Preserved::hold`] returns a token without whitespace or markup
/// characters, so it passes tag stripping, collapsing and trimming intact;
/// [`Preserved::restore`] swaps the tokens back.
#[derive(Debug, Default)]
pub(crate) struct Preserved {
	held: Vec<String>,
}

impl Preserved {
	pub(crate) fn hold(&mut self, text: String) -> String {
		let token = hold_token(self.held.len());
		self.held.push(text);
		token
	}

	pub(crate) fn restore(&self, s: &str) -> String {
		let mut out = s.to_string();
		for (i, text) in self.held.iter().enumerate().rev() {
			out = out.replace(&hold_token(i), text);
		}
		out
	}
}

fn hold_token(index: usize) -> String {
	format!("{HOLD_OPEN}{index}{HOLD_CLOSE}")
}

/// Text content of a markup fragment: tags dropped, entities decoded,
/// whitespace untouched.
pub(crate) fn verbatim_text(html: &str) -> String {
	decode_html_entities(&ANY_TAG.replace_all(html, ""))
}

/// Escape text or attribute values for HTML output.
pub(crate) fn escape_html(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#39;")
}

/// Decode the entities produced by [`escape_html`] plus a few common ones.
///
/// `&amp;` is decoded last so escaped entity text survives a round trip.
pub(crate) fn decode_html_entities(s: &str) -> String {
	s.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&apos;", "'")
		.replace("&#x27;", "'")
		.replace("&nbsp;", " ")
		.replace("&amp;", "&")
}

/// Collapse runs of spaces and tabs into one space.
pub(crate) fn collapse_spaces(s: &str) -> String {
	MULTI_SPACE.replace_all(s, " ").to_string()
}

/// Trim every line, squeeze blank-line runs to a single blank line and drop
/// leading/trailing blank lines.
pub(crate) fn tidy_lines<'a>(lines: impl Iterator<Item = &'a str>) -> String {
	let mut out: Vec<&str> = Vec::new();
	for line in lines.map(str::trim) {
		if line.is_empty() && out.last().is_none_or(|last| last.is_empty()) {
			continue;
		}
		out.push(line);
	}
	while out.last().is_some_and(|last| last.is_empty()) {
		out.pop();
	}
	out.join("\n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_known_entities() {
		assert_eq!(decode_html_entities("&amp;"), "&");
		assert_eq!(decode_html_entities("&lt;"), "<");
		assert_eq!(decode_html_entities("Hello&nbsp;World"), "Hello World");
	}

	#[test]
	fn escaped_entity_text_survives() {
		let escaped = escape_html("write &lt; for <");
		assert_eq!(escaped, "write &amp;lt; for &lt;");
		assert_eq!(decode_html_entities(&escaped), "write &lt; for <");
	}

	#[test]
	fn held_text_skips_normalisation() {
		let mut preserved = Preserved::default();
		let first = preserved.hold("a  b\n    c".to_string());
		let second = preserved.hold("d".to_string());
		let text = tidy_lines(collapse_spaces(&format!("  {first}  \n\n\n{second}")).lines());
		assert_eq!(preserved.restore(&text), "a  b\n    c\n\nd");
	}

	#[test]
	fn verbatim_text_keeps_indentation() {
		assert_eq!(verbatim_text("<code>if a &lt; b {\n    go();\n}</code>"), "if a < b {\n    go();\n}");
	}

	#[test]
	fn tidies_blank_lines() {
		let text = "\n\n  first \n\n\n second\n\n";
		assert_eq!(tidy_lines(text.lines()), "first\n\nsecond");
	}
}
