//! Manifest accumulation and CSV serialization.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::record::ImageRecord;

/// Header row of the manifest CSV.
pub const CSV_HEADER: &str = "date,imagepath";

/// Ordered collection of image records, written out as a two-column CSV.
///
/// Records accumulate in collection order (reverse-chronological by month,
/// within-month server order); the CSV text is built once at serialization
/// time. Once written, the file is never updated by the download phase.
#[derive(Debug, Default)]
pub struct Manifest {
    records: Vec<ImageRecord>,
}

impl Manifest {
    /// Create an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record in collection order.
    pub fn push(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    /// Number of collected records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were collected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The collected records in order.
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Serialize to CSV: header row plus one row per record, no index column.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(CSV_HEADER);
        out.push('\n');

        for record in &self.records {
            let _ = write!(
                out,
                "{},{}",
                csv_escape(&record.date),
                csv_escape(&record.image_url)
            );
            out.push('\n');
        }

        out
    }

    /// Parse a manifest back from CSV text.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();

        match lines.next() {
            Some(header) if header == CSV_HEADER => {}
            Some(header) => {
                return Err(Error::Manifest(format!(
                    "unexpected CSV header: '{}'",
                    header
                )))
            }
            None => return Err(Error::Manifest("empty manifest file".to_string())),
        }

        let mut manifest = Self::new();
        for (i, line) in lines.enumerate() {
            let (date, image_url) = parse_line(line).ok_or_else(|| {
                Error::Manifest(format!("malformed CSV row {}: '{}'", i + 2, line))
            })?;
            manifest.push(ImageRecord::new(date, image_url)?);
        }

        Ok(manifest)
    }

    /// Write the manifest CSV to a file.
    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_csv())?;
        Ok(())
    }

    /// Load a manifest from a CSV file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Split a two-field CSV row, honoring quoted fields.
fn parse_line(line: &str) -> Option<(String, String)> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
    }
    fields.push(current);

    if in_quotes || fields.len() != 2 {
        return None;
    }

    let mut fields = fields.into_iter();
    Some((fields.next().unwrap(), fields.next().unwrap()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, url: &str) -> ImageRecord {
        ImageRecord::new(date.to_string(), url.to_string()).unwrap()
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut manifest = Manifest::new();
        manifest.push(record(
            "2019年02月14日",
            "http://my365.s3.amazonaws.com/store/20190214/600x600/50/abc.jpg",
        ));

        let csv = manifest.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "date,imagepath");
        assert_eq!(
            lines[1],
            "2019年02月14日,http://my365.s3.amazonaws.com/store/20190214/600x600/50/abc.jpg"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn empty_manifest_is_header_only() {
        let csv = Manifest::new().to_csv();
        assert_eq!(csv, "date,imagepath\n");
    }

    #[test]
    fn round_trip_preserves_order() {
        let mut manifest = Manifest::new();
        manifest.push(record("2019年02月14日", "http://s3/20190214.jpg"));
        manifest.push(record("2019年02月01日", "http://s3/20190201.jpg"));
        manifest.push(record("2019年01月20日", "http://s3/20190120.jpg"));

        let parsed = Manifest::parse(&manifest.to_csv()).unwrap();
        assert_eq!(parsed.records(), manifest.records());
    }

    #[test]
    fn round_trip_with_escaped_field() {
        let mut manifest = Manifest::new();
        manifest.push(record("2019年02月14日", "http://s3/a,b\"c.jpg"));

        let parsed = Manifest::parse(&manifest.to_csv()).unwrap();
        assert_eq!(parsed.records(), manifest.records());
    }

    #[test]
    fn parse_rejects_wrong_header() {
        assert!(Manifest::parse("dates,urls\n").is_err());
        assert!(Manifest::parse("").is_err());
    }

    #[test]
    fn parse_rejects_malformed_row() {
        assert!(Manifest::parse("date,imagepath\nonly-one-field\n").is_err());
    }

    #[test]
    fn write_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("imagelist.csv");

        let mut manifest = Manifest::new();
        manifest.push(record("2019年02月14日", "http://s3/20190214.jpg"));
        manifest.write(&path).unwrap();

        let loaded = Manifest::load(&path).unwrap();
        assert_eq!(loaded.records(), manifest.records());
    }
}
