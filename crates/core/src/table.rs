//! Table field rendering.
//!
//! Rows become lines with cells joined by ` | `. Delimiter collisions inside
//! cell values are not escaped.

use serde_json::Value;

use crate::error::RenderError;

pub const CELL_DELIMITER: &str = " | ";

/// Renders a table value (`thead` cells, `tbody` rows of `body` cells).
///
/// Values that are not objects (an unfilled table is stored as an empty
/// string) render empty.
pub fn render_table(table: &Value) -> Result<String, RenderError> {
	let Some(table) = table.as_object() else {
		return Ok(String::new());
	};

	let thead = table
		.get("thead")
		.and_then(Value::as_array)
		.ok_or_else(|| RenderError::MalformedTable("missing `thead` array".to_string()))?;
	let tbody = table
		.get("tbody")
		.and_then(Value::as_array)
		.ok_or_else(|| RenderError::MalformedTable("missing `tbody` array".to_string()))?;

	let mut lines = Vec::with_capacity(tbody.len() + 1);
	lines.push(join_cells(thead));
	for (index, row) in tbody.iter().enumerate() {
		let cells = row
			.get("body")
			.and_then(Value::as_array)
			.ok_or_else(|| RenderError::MalformedTable(format!("row {index} has no `body` array")))?;
		lines.push(join_cells(cells));
	}

	Ok(lines.join("\n"))
}

fn join_cells(cells: &[Value]) -> String {
	cells.iter().map(cell_text).collect::<Vec<_>>().join(CELL_DELIMITER)
}

fn cell_text(cell: &Value) -> String {
	match cell.get("value") {
		Some(Value::String(s)) => s.clone(),
		Some(Value::Null) | None => String::new(),
		Some(other) => other.to_string(),
	}
}
