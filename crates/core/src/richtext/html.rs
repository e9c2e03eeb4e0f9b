//! Rich-text document to HTML.
//!
//! Documents are trees of `{ "type": ..., "attrs": {...}, "content": [...] }`
//! nodes whose leaves are `text` nodes carrying `marks`.

use std::fmt::Write;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde_json::Value;

use crate::richtext::entities::escape_html;

static LI_P_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li([^>]*)>\s*<p>").expect("LI_P_OPEN_RE should compile"));
/// A `<pre>` element; group 1 is its body without the `<code>` wrapper.
pub(crate) static PRE_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?is)<pre[^>]*>(?:<code[^>]*>)?(.*?)(?:</code>)?</pre>").expect("PRE_RE should compile"));
static LI_P_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</p>\s*</li>").expect("LI_P_CLOSE_RE should compile"));

pub(crate) fn document_to_html(document: &Value) -> Result<String, std::fmt::Error> {
	let mut out = String::new();
	write_node(document, &mut out)?;
	Ok(out)
}

/// Drop the paragraph wrapper list items carry so text renderers keep the
/// bullet and its text on one line.
pub(crate) fn unwrap_list_paragraphs(html: &str) -> String {
	let result = LI_P_OPEN_RE.replace_all(html, "<li$1>");
	LI_P_CLOSE_RE.replace_all(&result, "</li>").to_string()
}

fn write_node(node: &Value, out: &mut String) -> std::fmt::Result {
	let Some(node_type) = node.get("type").and_then(Value::as_str) else {
		return write_children(node, out);
	};
	let attrs = node.get("attrs");

	match node_type {
		"text" => write_text(node, out),
		"paragraph" => write_element(node, "p", out),
		"heading" => {
			let level = attr_u64(attrs, "level").unwrap_or(1).clamp(1, 6);
			write_element(node, &format!("h{level}"), out)
		}
		"bullet_list" => write_element(node, "ul", out),
		"ordered_list" => match attr_u64(attrs, "order") {
			Some(start) if start > 1 => {
				write!(out, "<ol start=\"{start}\">")?;
				write_children(node, out)?;
				out.push_str("</ol>");
				Ok(())
			}
			_ => write_element(node, "ol", out),
		},
		"list_item" => write_element(node, "li", out),
		"blockquote" => write_element(node, "blockquote", out),
		"code_block" => {
			out.push_str("<pre><code");
			if let Some(class) = attr_str(attrs, "class") {
				write!(out, " class=\"{}\"", escape_html(class))?;
			}
			out.push('>');
			write_children(node, out)?;
			out.push_str("</code></pre>");
			Ok(())
		}
		"horizontal_rule" => {
			out.push_str("<hr />");
			Ok(())
		}
		"hard_break" => {
			out.push_str("<br />");
			Ok(())
		}
		"image" => {
			let src = attr_str(attrs, "src").unwrap_or_default();
			let alt = attr_str(attrs, "alt").unwrap_or_default();
			write!(out, "<img src=\"{}\" alt=\"{}\"", escape_html(src), escape_html(alt))?;
			if let Some(title) = attr_str(attrs, "title") {
				write!(out, " title=\"{}\"", escape_html(title))?;
			}
			out.push_str(" />");
			Ok(())
		}
		"emoji" => {
			let emoji = attr_str(attrs, "emoji").unwrap_or_default();
			write!(out, "<span data-type=\"emoji\">{}</span>", escape_html(emoji))
		}
		// Embedded components are reached by structural recursion, not here.
		"blok" => Ok(()),
		_ => write_children(node, out),
	}
}

fn write_children(node: &Value, out: &mut String) -> std::fmt::Result {
	if let Some(children) = node.get("content").and_then(Value::as_array) {
		for child in children {
			write_node(child, out)?;
		}
	}
	Ok(())
}

fn write_element(node: &Value, tag: &str, out: &mut String) -> std::fmt::Result {
	write!(out, "<{tag}>")?;
	write_children(node, out)?;
	write!(out, "</{tag}>")
}

fn write_text(node: &Value, out: &mut String) -> std::fmt::Result {
	let text = node.get("text").and_then(Value::as_str).unwrap_or_default();
	let marks: Vec<(String, &'static str)> = node
		.get("marks")
		.and_then(Value::as_array)
		.map(|marks| marks.iter().filter_map(mark_tags).collect())
		.unwrap_or_default();

	for (open, _) in &marks {
		out.push_str(open);
	}
	out.push_str(&escape_html(text));
	for (_, close) in marks.iter().rev() {
		out.push_str(close);
	}
	Ok(())
}

/// Opening and closing tag for a text mark. Unknown marks are dropped.
fn mark_tags(mark: &Value) -> Option<(String, &'static str)> {
	let attrs = mark.get("attrs");
	let tags = match mark.get("type").and_then(Value::as_str)? {
		"bold" => ("<strong>".to_string(), "</strong>"),
		"italic" => ("<em>".to_string(), "</em>"),
		"strike" => ("<s>".to_string(), "</s>"),
		"underline" => ("<u>".to_string(), "</u>"),
		"code" => ("<code>".to_string(), "</code>"),
		"superscript" => ("<sup>".to_string(), "</sup>"),
		"subscript" => ("<sub>".to_string(), "</sub>"),
		"highlight" => ("<mark>".to_string(), "</mark>"),
		"link" => (link_open_tag(attrs), "</a>"),
		"anchor" => match attr_str(attrs, "id") {
			Some(id) => (format!("<span id=\"{}\">", escape_html(id)), "</span>"),
			None => ("<span>".to_string(), "</span>"),
		},
		"styled" => match attr_str(attrs, "class") {
			Some(class) => (format!("<span class=\"{}\">", escape_html(class)), "</span>"),
			None => ("<span>".to_string(), "</span>"),
		},
		"textStyle" => match attr_str(attrs, "color") {
			Some(color) => (format!("<span style=\"color: {}\">", escape_html(color)), "</span>"),
			None => ("<span>".to_string(), "</span>"),
		},
		_ => return None,
	};
	Some(tags)
}

fn link_open_tag(attrs: Option<&Value>) -> String {
	let mut href = attr_str(attrs, "href").unwrap_or_default().to_string();
	if attr_str(attrs, "linktype") == Some("email") && !href.is_empty() && !href.starts_with("mailto:") {
		href.insert_str(0, "mailto:");
	}
	if let Some(anchor) = attr_str(attrs, "anchor") {
		href.push('#');
		href.push_str(anchor);
	}

	let mut tag = format!("<a href=\"{}\"", escape_html(&href));
	if let Some(target) = attr_str(attrs, "target") {
		tag.push_str(&format!(" target=\"{}\"", escape_html(target)));
	}
	tag.push('>');
	tag
}

fn attr_str<'a>(attrs: Option<&'a Value>, key: &str) -> Option<&'a str> {
	attrs?.get(key)?.as_str().filter(|value| !value.is_empty())
}

fn attr_u64(attrs: Option<&Value>, key: &str) -> Option<u64> {
	attrs?.get(key)?.as_u64()
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn text(value: &str) -> Value {
		json!({ "type": "text", "text": value })
	}

	#[test]
	fn renders_paragraphs_with_marks() {
		let doc = json!({
			"type": "doc",
			"content": [{
				"type": "paragraph",
				"content": [
					text("Hello "),
					{ "type": "text", "text": "bold", "marks": [{ "type": "bold" }, { "type": "italic" }] }
				]
			}]
		});
		assert_eq!(document_to_html(&doc).unwrap(), "<p>Hello <strong><em>bold</em></strong></p>");
	}

	#[test]
	fn renders_headings_lists_and_breaks() {
		let doc = json!({
			"type": "doc",
			"content": [
				{ "type": "heading", "attrs": { "level": 2 }, "content": [text("Title")] },
				{ "type": "bullet_list", "content": [
					{ "type": "list_item", "content": [{ "type": "paragraph", "content": [text("One")] }] }
				]},
				{ "type": "paragraph", "content": [text("a"), { "type": "hard_break" }, text("b")] },
				{ "type": "horizontal_rule" }
			]
		});
		assert_eq!(
			document_to_html(&doc).unwrap(),
			"<h2>Title</h2><ul><li><p>One</p></li></ul><p>a<br />b</p><hr />"
		);
	}

	#[test]
	fn renders_links() {
		let doc = json!({
			"type": "paragraph",
			"content": [
				{ "type": "text", "text": "mail", "marks": [{ "type": "link", "attrs": { "href": "hi@example.com", "linktype": "email" } }] },
				{ "type": "text", "text": "docs", "marks": [{ "type": "link", "attrs": { "href": "/docs", "anchor": "intro", "target": "_blank" } }] }
			]
		});
		assert_eq!(
			document_to_html(&doc).unwrap(),
			"<p><a href=\"mailto:hi@example.com\">mail</a><a href=\"/docs#intro\" target=\"_blank\">docs</a></p>"
		);
	}

	#[test]
	fn escapes_text_and_skips_bloks() {
		let doc = json!({
			"type": "doc",
			"content": [
				{ "type": "paragraph", "content": [text("1 < 2 & \"q\"")] },
				{ "type": "blok", "attrs": { "body": [{ "component": "teaser", "headline": "hidden" }] } }
			]
		});
		assert_eq!(document_to_html(&doc).unwrap(), "<p>1 &lt; 2 &amp; &quot;q&quot;</p>");
	}

	#[test]
	fn unknown_nodes_render_children() {
		let doc = json!({ "type": "custom_wrapper", "content": [text("inside")] });
		assert_eq!(document_to_html(&doc).unwrap(), "inside");
	}

	#[test]
	fn unwraps_list_item_paragraphs() {
		assert_eq!(unwrap_list_paragraphs("<ul><li><p>One</p></li></ul>"), "<ul><li>One</li></ul>");
	}
}
