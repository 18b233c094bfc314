//! Destination path management.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::naming::validate_filename;

/// Get the on-disk path an item named `name` is written to.
pub fn destination_path(destination_dir: &Path, name: &str) -> Result<PathBuf> {
    validate_filename(name)?;
    Ok(destination_dir.join(name))
}
