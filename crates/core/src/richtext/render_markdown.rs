//! HTML-to-markdown rendering for lightweight markup output.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

use crate::richtext::entities::{Preserved, collapse_spaces, decode_html_entities, tidy_lines, verbatim_text};
use crate::richtext::html::{PRE_RE, unwrap_list_paragraphs};

static MD_HEADER_OPEN_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
	(1..=6)
		.map(|level| Regex::new(&format!(r"(?i)<h{level}\s*[^>]*>")).expect("header open regex should compile"))
		.collect()
});
static MD_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(^|>)([^<]+)").expect("MD_TEXT_RE should compile"));
static MD_BLOCKQUOTE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<blockquote[^>]*>(.*?)</blockquote>").expect("MD_BLOCKQUOTE_RE should compile"));
static MD_OL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?is)<ol(?:\s+start="(\d+)")?[^>]*>(.*?)</ol>"#).expect("MD_OL_RE should compile"));
static MD_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<code[^>]*>([^<]*)</code>").expect("MD_CODE_RE should compile"));
static MD_STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<(?:strong|b)>([^<]*)</(?:strong|b)>").expect("MD_STRONG_RE should compile"));
static MD_EM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<(?:em|i)>([^<]*)</(?:em|i)>").expect("MD_EM_RE should compile"));
static MD_STRIKE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<(?:s|del)>([^<]*)</(?:s|del)>").expect("MD_STRIKE_RE should compile"));
static MD_LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"(?i)<a[^>]*href="([^"]*)"[^>]*>([^<]*)</a>"#).expect("MD_LINK_RE should compile"));
static MD_IMG_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"(?i)<img[^>]*src="([^"]*)"[^>]*alt="([^"]*)"[^>]*/?>"#).expect("MD_IMG_RE should compile"));
static MD_P_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?p[^>]*>").expect("MD_P_RE should compile"));
static MD_BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("MD_BR_RE should compile"));
static MD_HR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<hr\s*/?>").expect("MD_HR_RE should compile"));
static MD_LI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<li[^>]*>").expect("MD_LI_RE should compile"));
static MD_LIST_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?[uo]l[^>]*>").expect("MD_LIST_RE should compile"));
static MD_ANY_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("MD_ANY_TAG_RE should compile"));
static EMPTY_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s*$").expect("EMPTY_HEADER should compile"));

const MAX_INLINE_PASSES: usize = 8;

/// Converts HTML into markdown with ATX headings.
///
/// Markdown syntax characters in text are backslash-escaped; fenced code
/// blocks keep their content verbatim.
pub(crate) fn html_to_markdown(html: &str) -> String {
	let mut preserved = Preserved::default();
	let mut result = unwrap_list_paragraphs(html);

	result = PRE_RE
		.replace_all(&result, |caps: &Captures| {
			let fenced = format!("```\n{}\n```", verbatim_text(&caps[1]));
			format!("\n\n{}\n\n", preserved.hold(fenced))
		})
		.to_string();
	result = MD_TEXT_RE
		.replace_all(&result, |caps: &Captures| format!("{}{}", &caps[1], escape_markdown(&caps[2])))
		.to_string();
	result = MD_BLOCKQUOTE_RE.replace_all(&result, quote_block).to_string();
	result = MD_OL_RE.replace_all(&result, number_list_items).to_string();

	for i in 1..=6 {
		let hashes = "#".repeat(i);
		let close = format!("</h{}>", i);
		result = MD_HEADER_OPEN_RES[i - 1].replace_all(&result, &format!("\n\n{} ", hashes)).to_string();
		result = result.replace(&close, "\n\n");
	}

	// Inline marks nest, so convert innermost spans until nothing changes.
	for _ in 0..MAX_INLINE_PASSES {
		let before = result.len();
		result = MD_CODE_RE.replace_all(&result, "`$1`").to_string();
		result = MD_STRONG_RE.replace_all(&result, "**$1**").to_string();
		result = MD_EM_RE.replace_all(&result, "*$1*").to_string();
		result = MD_STRIKE_RE.replace_all(&result, "~~$1~~").to_string();
		result = MD_LINK_RE.replace_all(&result, "[$2]($1)").to_string();
		if result.len() == before {
			break;
		}
	}

	result = MD_IMG_RE.replace_all(&result, "![$2]($1)").to_string();
	result = MD_P_RE.replace_all(&result, "\n\n").to_string();
	result = MD_BR_RE.replace_all(&result, "\n").to_string();
	result = MD_HR_RE.replace_all(&result, "\n\n---\n\n").to_string();
	result = MD_LI_RE.replace_all(&result, "\n- ").to_string();
	result = result.replace("</li>", "");
	result = MD_LIST_RE.replace_all(&result, "\n\n").to_string();
	result = MD_ANY_TAG_RE.replace_all(&result, "").to_string();
	result = decode_html_entities(&result);
	result = collapse_spaces(&result);

	preserved.restore(&tidy_lines(result.lines().filter(|l| !EMPTY_HEADER.is_match(l.trim()))))
}

/// Escapes characters markdown would read as syntax. `#` only matters where
/// it could open a heading, at the start of a text run.
fn escape_markdown(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for (i, c) in text.chars().enumerate() {
		match c {
			'\\' | '*' | '_' | '`' | '[' | ']' => {
				out.push('\\');
				out.push(c);
			}
			'#' if i == 0 => out.push_str("\\#"),
			_ => out.push(c),
		}
	}
	out
}

fn quote_block(caps: &Captures) -> String {
	let inner = MD_P_RE.replace_all(&caps[1], "\n");
	let quoted: Vec<String> = inner
		.lines()
		.map(str::trim)
		.filter(|l| !l.is_empty())
		.map(|l| format!("> {l}"))
		.collect();
	format!("\n\n{}\n\n", quoted.join("\n"))
}

fn number_list_items(caps: &Captures) -> String {
	let mut n: u64 = caps.get(1).and_then(|m| m.as_str().parse().ok()).unwrap_or(1);
	let items = MD_LI_RE.replace_all(&caps[2], |_: &Captures| {
		let marker = format!("\n{n}. ");
		n += 1;
		marker
	});
	format!("\n\n{}\n\n", items.replace("</li>", ""))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn converts_headings_and_links() {
		let html = "<h1>Title</h1><p><a href=\"https://example.com\">link</a></p>";
		assert_eq!(html_to_markdown(html), "# Title\n\n[link](https://example.com)");
	}

	#[test]
	fn converts_nested_marks() {
		let html = "<p><em><strong>both</strong></em> and <strong><em>again</em></strong></p>";
		assert_eq!(html_to_markdown(html), "***both*** and ***again***");
	}

	#[test]
	fn converts_lists() {
		let html = "<ul><li><p>One</p></li><li><p>Two</p></li></ul><ol><li><p>First</p></li><li><p>Second</p></li></ol>";
		assert_eq!(html_to_markdown(html), "- One\n- Two\n\n1. First\n2. Second");
	}

	#[test]
	fn quotes_code_and_rules() {
		let html = "<blockquote><p>Quoted <em>text</em></p></blockquote><pre><code>let x = 1;</code></pre><hr />";
		assert_eq!(html_to_markdown(html), "> Quoted *text*\n\n```\nlet x = 1;\n```\n\n---");
	}

	#[test]
	fn fenced_code_keeps_indentation() {
		let html = "<pre><code>fn a() {\n    b(x_1, *y);\n}</code></pre>";
		assert_eq!(html_to_markdown(html), "```\nfn a() {\n    b(x_1, *y);\n}\n```");
	}

	#[test]
	fn escapes_markdown_syntax_in_text() {
		let html = "<p>2*3*4 = snake_case [sic] <strong>a*b</strong></p><p>#1 pick, C# too</p>";
		assert_eq!(html_to_markdown(html), "2\\*3\\*4 = snake\\_case \\[sic\\] **a\\*b**\n\n\\#1 pick, C# too");
	}

	#[test]
	fn link_targets_are_not_escaped() {
		let html = "<p><a href=\"https://example.com/a_b*c\">x_y</a></p>";
		assert_eq!(html_to_markdown(html), "[x\\_y](https://example.com/a_b*c)");
	}

	#[test]
	fn drops_empty_headings() {
		assert_eq!(html_to_markdown("<h2></h2><p>Body</p>"), "Body");
	}
}
