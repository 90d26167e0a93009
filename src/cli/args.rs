//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// my365 photo archiver CLI.
#[derive(Parser, Debug)]
#[command(
    name = "my365-archiver",
    version,
    about = "Archive posted images from the my365 photo diary",
    long_about = "A CLI tool that logs in to the my365 photo diary, collects the URL of every \
                  posted image back to a configured month, writes the list to a CSV manifest, \
                  and downloads each image."
)]
pub struct Args {
    /// Base URL of the diary service.
    #[arg(long)]
    pub host: Option<String>,

    /// Account ID to log in with.
    #[arg(short, long)]
    pub user: Option<String>,

    /// Account password.
    #[arg(short, long, env = "MY365_PASSWORD")]
    pub password: Option<String>,

    /// Oldest year to crawl back to (inclusive).
    #[arg(long)]
    pub first_year: Option<i32>,

    /// Oldest month to crawl back to (inclusive, 1-12).
    #[arg(long)]
    pub first_month: Option<u32>,

    /// Directory downloaded images are written into.
    #[arg(short = 'd', long = "output-dir")]
    pub output_directory: Option<PathBuf>,

    /// Path of the manifest CSV file.
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Collect URLs and write the manifest, but skip the download phase.
    #[arg(long)]
    pub list_only: bool,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(ref host) = self.host {
            config.settings.host = host.clone();
        }

        if let Some(ref user) = self.user {
            config.user.account = user.clone();
        }

        if let Some(ref password) = self.password {
            config.user.password = password.clone();
        }

        if let Some(year) = self.first_year {
            config.settings.first_year = year;
        }

        if let Some(month) = self.first_month {
            config.settings.first_month = month;
        }

        if let Some(ref dir) = self.output_directory {
            config.io.output_directory = dir.clone();
        }

        if let Some(ref manifest) = self.manifest {
            config.io.imagelist = manifest.clone();
        }
    }
}
