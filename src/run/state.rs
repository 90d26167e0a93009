//! Run statistics tracking.

/// Counters accumulated over one archive run.
#[derive(Debug, Default)]
pub struct ArchiveStats {
    pub months_scanned: u64,
    pub posts_found: u64,
    pub images_downloaded: u64,
    pub bytes_written: u64,
}

impl ArchiveStats {
    /// Count one scanned calendar month.
    pub fn count_month(&mut self) {
        self.months_scanned += 1;
    }

    /// Count one collected day-post record.
    pub fn count_post(&mut self) {
        self.posts_found += 1;
    }

    /// Count one downloaded image of `bytes` size.
    pub fn count_download(&mut self, bytes: u64) {
        self.images_downloaded += 1;
        self.bytes_written += bytes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut stats = ArchiveStats::default();
        stats.count_month();
        stats.count_post();
        stats.count_post();
        stats.count_download(100);
        stats.count_download(50);

        assert_eq!(stats.months_scanned, 1);
        assert_eq!(stats.posts_found, 2);
        assert_eq!(stats.images_downloaded, 2);
        assert_eq!(stats.bytes_written, 150);
    }
}
