//! Progress and result lines printed to stdout.

use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use crate::config::ExportConfig;

/// Outcome of a finished export.
#[derive(Debug, Default)]
pub struct ExportSummary {
	pub written: Vec<PathBuf>,
	pub elapsed: Duration,
}

/// Settings overview printed before anything is fetched.
pub fn settings_lines(config: &ExportConfig) -> Vec<String> {
	let yes_no = |flag: bool| if flag { "yes" } else { "no" };
	let mut lines = vec![
		format!("Performing text-export of space {}:", config.space_id),
		format!("- region: {}", config.region),
		format!("- output dir: {}", config.output_dir.display()),
		format!("- rich-text output: {}", config.rich_text_output),
		format!("- only translatable fields: {}", yes_no(config.flatten.translatable_only)),
		format!("- include field paths: {}", yes_no(config.flatten.include_field_paths)),
		format!(
			"- content types: {}",
			if config.filter.content_types.is_empty() {
				"all".to_string()
			} else {
				config.filter.content_types.join(", ")
			}
		),
	];
	if !config.filter.skip_stories.is_empty() {
		lines.push(format!("- skipped stories: {}", config.filter.skip_stories.join(", ")));
	}
	if !config.filter.only_stories.is_empty() {
		lines.push(format!("- only stories: {}", config.filter.only_stories.join(", ")));
	}
	lines
}

pub fn print_settings(config: &ExportConfig) {
	println!();
	for (i, line) in settings_lines(config).into_iter().enumerate() {
		if i == 0 {
			println!("{}", line.bold());
		} else {
			println!("{line}");
		}
	}
}

pub fn print_phase(title: &str) {
	println!();
	println!("{}", title.cyan().bold());
}

pub fn result_line(summary: &ExportSummary) -> String {
	format!(
		"Process successfully finished in {} seconds ({} {} written).",
		summary.elapsed.as_secs_f64().round() as u64,
		summary.written.len(),
		if summary.written.len() == 1 { "file" } else { "files" }
	)
}

pub fn print_result(summary: &ExportSummary) {
	println!();
	println!("{}", "Result".bold());
	println!("======");
	println!("{} {}", "OK".green().bold(), result_line(summary));
}
