//! Filesystem module.
//!
//! Provides:
//! - Output directory management
//! - Destination filename generation

pub mod naming;
pub mod paths;

pub use naming::{image_filename, sanitize_filename, url_basename};
pub use paths::ensure_dir;
