//! Statistics reporting.

use console::style;

use crate::run::ArchiveStats;

/// Print end-of-run statistics.
pub fn print_archive_stats(stats: &ArchiveStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run statistics:").bold());
    println!("  Months scanned:    {}", stats.months_scanned);
    println!("  Posts found:       {}", stats.posts_found);
    println!("  Images downloaded: {}", stats.images_downloaded);
    println!("  Bytes written:     {}", stats.bytes_written);
    println!("{}", style("═".repeat(50)).dim());
}
