//! my365 Archiver - photo diary backup tool
//!
//! This library crawls a my365 photo diary account, collects the storage
//! URL of every posted image back to a configured month, writes the list
//! to a CSV manifest, and downloads each image.
//!
//! # Pipeline
//!
//! - Log in and obtain a session cookie
//! - Walk calendar months backwards from the current month
//! - Extract day-post links from each month page
//! - Extract the display date and image URL from each post page
//! - Persist the manifest CSV, then download every image
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use my365_archiver::{api::DiaryClient, config::Config, run::run_archive};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let client =
//!         DiaryClient::login(config.host(), &config.user.account, &config.user.password).await?;
//!     let stats = run_archive(&client, &config, false).await?;
//!     println!("{} images downloaded", stats.images_downloaded);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod output;
pub mod run;
pub mod scrape;

// Re-exports for convenience
pub use api::DiaryClient;
pub use config::Config;
pub use error::{Error, Result};
pub use manifest::{ImageRecord, Manifest};
pub use run::{run_archive, ArchiveStats};
pub use scrape::MonthKey;
