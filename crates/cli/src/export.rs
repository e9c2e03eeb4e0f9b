//! The export pipeline: select stories, resolve their components, write one
//! text file per story.

use std::time::Instant;

use sbtx::{Flattener, SchemaIndex, render_story};
use tracing::{debug, info};

use crate::artifacts::{check_output_dir, recreate_output_dir, write_artifact};
use crate::client::StoryblokClient;
use crate::config::ExportConfig;
use crate::error::Result;
use crate::report::{ExportSummary, print_phase, print_settings};

pub async fn run(config: &ExportConfig) -> Result<ExportSummary> {
	let started = Instant::now();

	check_output_dir(&config.output_dir, config.force)?;
	print_settings(config);
	recreate_output_dir(&config.output_dir)?;

	let client = StoryblokClient::from_config(config)?;

	print_phase("Fetching stories...");
	let listed = client.stories(config.space_id).await?;
	let total = listed.len();
	let entries = config.filter.apply(listed);
	debug!(target = "sbtx", total, selected = entries.len(), "filtered story list");

	let mut stories = Vec::with_capacity(entries.len());
	for entry in &entries {
		stories.push(client.story(config.space_id, entry.id).await?);
	}

	print_phase("Fetching components...");
	let index = SchemaIndex::from_components(client.components(config.space_id).await?);
	debug!(target = "sbtx", components = index.len(), "indexed component schemas");

	print_phase("Processing stories...");
	let flattener = Flattener::new(&index, config.flatten);
	let mut written = Vec::with_capacity(stories.len());
	for story in &stories {
		info!(target = "sbtx", slug = %story.full_slug, name = %story.name, "processing story");
		let text = render_story(story, &flattener)?;
		let path = write_artifact(&config.output_dir, &story.full_slug, &text)?;
		info!(target = "sbtx", path = %path.display(), "story text written");
		written.push(path);
	}

	Ok(ExportSummary {
		written,
		elapsed: started.elapsed(),
	})
}
