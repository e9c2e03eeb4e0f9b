//! Storyblok Management API client.
//!
//! Listings are paged with `per_page`/`page`; the `total` response header
//! carries the item count across all pages.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use sbtx_protocol::{Component, Story, StoryEnvelope, StoryListEntry};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::config::{DEFAULT_PAGE_SIZE, ExportConfig};
use crate::error::{ExportError, Result};

const TOTAL_HEADER: &str = "total";
const MAX_RETRIES: u32 = 5;
const RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub struct StoryblokClient {
	http: reqwest::Client,
	base_url: String,
	token: String,
	page_size: usize,
	retry_delay: Duration,
}

impl StoryblokClient {
	pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
		let http = reqwest::Client::builder().timeout(Duration::from_secs(60)).build()?;
		Ok(Self {
			http,
			base_url: base_url.into().trim_end_matches('/').to_string(),
			token: token.into(),
			page_size: DEFAULT_PAGE_SIZE,
			retry_delay: RETRY_DELAY,
		})
	}

	pub fn from_config(config: &ExportConfig) -> Result<Self> {
		Ok(Self::new(&config.api_base_url, &config.token)?.with_page_size(config.page_size))
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size.max(1);
		self
	}

	/// Base delay between rate-limited attempts; attempt `n` waits `n` times it.
	pub fn with_retry_delay(mut self, delay: Duration) -> Self {
		self.retry_delay = delay;
		self
	}

	/// Story summaries of a space, folders included.
	pub async fn stories(&self, space_id: u64) -> Result<Vec<StoryListEntry>> {
		self.get_all(&format!("spaces/{space_id}/stories"), "stories").await
	}

	/// A single story with its full content tree.
	pub async fn story(&self, space_id: u64, story_id: u64) -> Result<Story> {
		let url = self.url(&format!("spaces/{space_id}/stories/{story_id}"));
		let response = self.get(&url, &[]).await?;
		let envelope: StoryEnvelope = decode(&url, response.json().await?)?;
		Ok(envelope.story)
	}

	/// Component definitions of a space.
	pub async fn components(&self, space_id: u64) -> Result<Vec<Component>> {
		self.get_all(&format!("spaces/{space_id}/components"), "components").await
	}

	/// Collects every page of a listing whose items live under `entity`.
	pub async fn get_all<T: DeserializeOwned>(&self, path: &str, entity: &str) -> Result<Vec<T>> {
		let url = self.url(path);
		let mut items = Vec::new();
		let mut page = 1usize;

		loop {
			let query = [("per_page", self.page_size.to_string()), ("page", page.to_string())];
			let response = self.get(&url, &query).await?;
			let total = response
				.headers()
				.get(TOTAL_HEADER)
				.and_then(|value| value.to_str().ok())
				.and_then(|value| value.trim().parse::<usize>().ok());

			let mut body: Value = response.json().await?;
			let Some(entries) = body.get_mut(entity).map(Value::take) else {
				return Err(ExportError::Decode {
					url,
					message: format!("missing `{entity}` array"),
				});
			};
			let entries: Vec<T> = decode(&url, entries)?;
			let received = entries.len();
			items.extend(entries);
			trace!(target = "sbtx", %url, page, received, ?total, "fetched page");

			let done = match total {
				Some(total) => page >= page_count(total, self.page_size),
				None => received < self.page_size,
			};
			if done || received == 0 {
				break;
			}
			page += 1;
		}

		debug!(target = "sbtx", %url, count = items.len(), "fetched listing");
		Ok(items)
	}

	fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
		let mut attempt = 0;
		loop {
			let response = self
				.http
				.get(url)
				.header(AUTHORIZATION, &self.token)
				.query(query)
				.send()
				.await?;

			let status = response.status();
			if status == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_RETRIES {
				attempt += 1;
				let delay = self.retry_delay * attempt;
				warn!(target = "sbtx", %url, attempt, delay_ms = delay.as_millis() as u64, "rate limited, retrying");
				tokio::time::sleep(delay).await;
				continue;
			}
			if !status.is_success() {
				return Err(ExportError::Api {
					status: status.as_u16(),
					url: url.to_string(),
				});
			}
			return Ok(response);
		}
	}
}

/// Number of pages holding `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
	total.div_ceil(page_size.max(1))
}

fn decode<T: DeserializeOwned>(url: &str, value: Value) -> Result<T> {
	serde_json::from_value(value).map_err(|e| ExportError::Decode {
		url: url.to_string(),
		message: e.to_string(),
	})
}
