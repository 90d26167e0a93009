//! Top-level crawl and download pipeline.
//!
//! Strictly sequential: one request at a time, each await completes before
//! the next request is issued. Any fetch, extraction, or download failure
//! aborts the run; the manifest CSV already on disk is left untouched.

use std::path::Path;
use std::time::Duration;

use futures::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

use crate::api::DiaryClient;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::{ensure_dir, image_filename};
use crate::manifest::Manifest;
use crate::output::{create_item_bar, print_info};
use crate::run::state::ArchiveStats;
use crate::scrape::{day_post_paths, extract_image_record, MonthKey};

/// Interval of periodic progress lines during the download phase.
const PROGRESS_INTERVAL: usize = 10;

/// Drive the whole run: collect records, persist the manifest, download.
///
/// The manifest is written completely before the first download, so a
/// failure during the download phase never loses the collected URL list.
pub async fn run_archive(
    client: &DiaryClient,
    config: &Config,
    list_only: bool,
) -> Result<ArchiveStats> {
    let mut stats = ArchiveStats::default();

    ensure_dir(&config.io.output_directory)?;

    print_info("Collecting posted image URLs...");
    let manifest = collect_manifest(client, config, &mut stats).await?;
    print_info(&format!("Collected {} image URLs.", manifest.len()));

    manifest.write(&config.io.imagelist)?;
    print_info(&format!(
        "Manifest written to {}.",
        config.io.imagelist.display()
    ));

    if list_only {
        print_info("List-only mode, skipping downloads.");
        return Ok(stats);
    }

    print_info("Downloading images...");
    download_images(client, config, &manifest, &mut stats).await?;

    Ok(stats)
}

/// Crawl every month from the current one back to the configured floor,
/// collecting one record per day-post in server order.
pub async fn collect_manifest(
    client: &DiaryClient,
    config: &Config,
    stats: &mut ArchiveStats,
) -> Result<Manifest> {
    let start = MonthKey::current();
    let floor = MonthKey::new(config.settings.first_year, config.settings.first_month);

    let mut manifest = Manifest::new();

    for month in start.descend_to(floor) {
        tracing::info!("Collecting {}", month);

        let body = client.month_page(&month.key()).await?;
        let paths = day_post_paths(client.account(), &body);
        tracing::debug!("{}: {} day posts", month, paths.len());

        for path in &paths {
            let body = client.post_page(path).await?;
            let record = extract_image_record(month.year, path, &body)?;
            manifest.push(record);
            stats.count_post();
        }

        stats.count_month();
    }

    Ok(manifest)
}

/// Download every manifest record into the output directory, in collection
/// order. Destination files are overwritten silently.
pub async fn download_images(
    client: &DiaryClient,
    config: &Config,
    manifest: &Manifest,
    stats: &mut ArchiveStats,
) -> Result<()> {
    let timeout = Duration::from_secs(config.settings.download_timeout_seconds);
    let total = manifest.len();
    let bar = create_item_bar(total as u64, "Downloading");

    for (i, record) in manifest.records().iter().enumerate() {
        let response = client.fetch_image(&record.image_url, timeout).await?;

        let filename = image_filename(&record.date, &record.image_url)?;
        let dest = config.io.output_directory.join(&filename);
        let written = save_image(response, &dest).await?;

        stats.count_download(written);
        bar.inc(1);

        if (i + 1) % PROGRESS_INTERVAL == 0 {
            tracing::info!("{}/{} images downloaded", i + 1, total);
        }
    }

    bar.finish_and_clear();
    Ok(())
}

/// Stream a validated image response to `dest`, returning the byte count.
async fn save_image(response: reqwest::Response, dest: &Path) -> Result<u64> {
    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut written = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(written)
}
