//! Filesystem module.
//!
//! Provides:
//! - Destination path construction
//! - Filename validation

pub mod naming;
pub mod paths;

pub use naming::validate_filename;
pub use paths::destination_path;
