//! Run module: pipeline orchestration and statistics.

pub mod pipeline;
pub mod state;

pub use pipeline::{collect_manifest, download_images, run_archive};
pub use state::ArchiveStats;
