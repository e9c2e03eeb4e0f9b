//! Indented HTML output for the markup rendering mode.

use std::sync::LazyLock;

use regex_lite::Regex;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>|[^<]+").expect("TOKEN_RE should compile"));

const INDENT: &str = "  ";

const BLOCK_TAGS: &[&str] = &[
	"p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "blockquote", "pre", "hr", "table", "thead", "tbody", "tr",
];

const VOID_TAGS: &[&str] = &["br", "hr", "img"];

#[derive(Debug)]
enum Node {
	Element { name: String, open: String, children: Vec<Node> },
	Void { name: String, token: String },
	Text(String),
}

impl Node {
	fn is_block(&self) -> bool {
		match self {
			Node::Element { name, .. } | Node::Void { name, .. } => BLOCK_TAGS.contains(&name.as_str()),
			Node::Text(_) => false,
		}
	}

	fn write_inline(&self, out: &mut String) {
		match self {
			Node::Element { name, open, children } => {
				out.push_str(open);
				for child in children {
					child.write_inline(out);
				}
				out.push_str("</");
				out.push_str(name);
				out.push('>');
			}
			Node::Void { token, .. } => out.push_str(token),
			Node::Text(text) => out.push_str(text),
		}
	}
}

/// Puts block elements on their own lines. Blocks containing other blocks
/// get their children indented one level deeper.
pub(crate) fn prettify_html(html: &str) -> String {
	let nodes = parse(html);
	let mut lines = Vec::new();
	write_nodes(&nodes, 0, &mut lines);
	lines.join("\n")
}

fn parse(html: &str) -> Vec<Node> {
	// Stack of open elements; the bottom frame collects top-level nodes.
	let mut stack: Vec<(String, String, Vec<Node>)> = vec![(String::new(), String::new(), Vec::new())];

	for token in TOKEN_RE.find_iter(html).map(|m| m.as_str()) {
		if let Some(closing) = token.strip_prefix("</") {
			let name = tag_name(closing);
			if stack.len() > 1 && stack.iter().skip(1).any(|(open_name, _, _)| *open_name == name) {
				while let Some((open_name, open, children)) = stack.pop() {
					let done = open_name == name;
					let element = Node::Element { name: open_name, open, children };
					if let Some((_, _, parent)) = stack.last_mut() {
						parent.push(element);
					}
					if done {
						break;
					}
				}
			}
		} else if token.starts_with('<') {
			let name = tag_name(&token[1..]);
			let node_token = token.to_string();
			if token.ends_with("/>") || VOID_TAGS.contains(&name.as_str()) {
				push_child(&mut stack, Node::Void { name, token: node_token });
			} else {
				stack.push((name, node_token, Vec::new()));
			}
		} else {
			push_child(&mut stack, Node::Text(token.to_string()));
		}
	}

	// Close anything left open.
	while stack.len() > 1 {
		if let Some((name, open, children)) = stack.pop() {
			push_child(&mut stack, Node::Element { name, open, children });
		}
	}
	stack.pop().map(|(_, _, children)| children).unwrap_or_default()
}

fn push_child(stack: &mut [(String, String, Vec<Node>)], node: Node) {
	if let Some((_, _, children)) = stack.last_mut() {
		children.push(node);
	}
}

fn tag_name(after_bracket: &str) -> String {
	after_bracket
		.chars()
		.take_while(|c| c.is_ascii_alphanumeric())
		.collect::<String>()
		.to_ascii_lowercase()
}

fn write_nodes(nodes: &[Node], depth: usize, lines: &mut Vec<String>) {
	let mut inline = String::new();
	for node in nodes {
		if node.is_block() {
			flush_inline(&mut inline, depth, lines);
			write_block(node, depth, lines);
		} else {
			node.write_inline(&mut inline);
		}
	}
	flush_inline(&mut inline, depth, lines);
}

fn write_block(node: &Node, depth: usize, lines: &mut Vec<String>) {
	let indent = INDENT.repeat(depth);
	match node {
		Node::Element { name, open, children } if children.iter().any(Node::is_block) => {
			lines.push(format!("{indent}{open}"));
			write_nodes(children, depth + 1, lines);
			lines.push(format!("{indent}</{name}>"));
		}
		_ => {
			let mut line = indent;
			node.write_inline(&mut line);
			lines.push(line);
		}
	}
}

fn flush_inline(inline: &mut String, depth: usize, lines: &mut Vec<String>) {
	let trimmed = inline.trim();
	if !trimmed.is_empty() {
		lines.push(format!("{}{}", INDENT.repeat(depth), trimmed));
	}
	inline.clear();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keeps_leaf_blocks_on_one_line() {
		let html = "<h2>Title</h2><p>Hello <strong>there</strong></p><hr />";
		assert_eq!(prettify_html(html), "<h2>Title</h2>\n<p>Hello <strong>there</strong></p>\n<hr />");
	}

	#[test]
	fn indents_nested_blocks() {
		let html = "<ul><li><p>One</p></li><li><p>Two</p></li></ul>";
		let expected = "<ul>\n  <li>\n    <p>One</p>\n  </li>\n  <li>\n    <p>Two</p>\n  </li>\n</ul>";
		assert_eq!(prettify_html(html), expected);
	}

	#[test]
	fn tolerates_unbalanced_markup() {
		assert_eq!(prettify_html("<p>open <em>never closed"), "<p>open <em>never closed</em></p>");
		assert_eq!(prettify_html("stray</p> text"), "stray text");
	}
}
