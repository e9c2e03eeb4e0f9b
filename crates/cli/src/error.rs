use std::path::PathBuf;

use sbtx::FlattenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
	#[error("output directory \"{}\" already exists; use --force to delete and recreate it (possibly dangerous!)", .0.display())]
	OutputDirExists(PathBuf),

	#[error("output file \"{}\" already exists; two stories map to the same file name", .0.display())]
	OutputFileExists(PathBuf),

	#[error("request to {url} failed with status {status}")]
	Api { status: u16, url: String },

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("unexpected response from {url}: {message}")]
	Decode { url: String, message: String },

	#[error("failed to {action} \"{}\": {source}", .path.display())]
	Io {
		action: &'static str,
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error(transparent)]
	Flatten(#[from] FlattenError),
}

impl ExportError {
	pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			action,
			path: path.into(),
			source,
		}
	}
}

pub type Result<T> = std::result::Result<T, ExportError>;
