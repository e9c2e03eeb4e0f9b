//! Output directory handling.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use sbtx::artifact_file_name;

use crate::error::{ExportError, Result};

/// Fails when `dir` exists and `force` is not set.
pub fn check_output_dir(dir: &Path, force: bool) -> Result<()> {
	if dir.exists() && !force {
		return Err(ExportError::OutputDirExists(dir.to_path_buf()));
	}
	Ok(())
}

/// Deletes `dir` if present and creates it empty.
pub fn recreate_output_dir(dir: &Path) -> Result<()> {
	if dir.exists() {
		fs::remove_dir_all(dir).map_err(|e| ExportError::io("delete", dir, e))?;
	}
	fs::create_dir_all(dir).map_err(|e| ExportError::io("create", dir, e))
}

/// Writes the artifact of the story at `full_slug`, never replacing an
/// existing file.
pub fn write_artifact(dir: &Path, full_slug: &str, text: &str) -> Result<PathBuf> {
	let path = dir.join(artifact_file_name(full_slug));
	let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
		Ok(file) => file,
		Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(ExportError::OutputFileExists(path)),
		Err(e) => return Err(ExportError::io("create", path, e)),
	};
	file.write_all(text.as_bytes()).map_err(|e| ExportError::io("write", &path, e))?;
	Ok(path)
}
