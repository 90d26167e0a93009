//! Post page extraction: display date and image storage URL.

use regex::Regex;

use crate::error::{Error, Result};
use crate::manifest::ImageRecord;

/// Display date as embedded in the Japanese post page, e.g. `02月14日`.
const DATE_PATTERN: &str = "[0-9]{2}月[0-9]{2}日";

/// Storage URL of the posted image: fixed bucket, 8-digit folder,
/// 600x600/50 size and quality segment.
const IMAGE_URL_PATTERN: &str =
    r"http://my365\.s3\.amazonaws\.com/store/[0-9]{8}/600x600/50/\w+\.jpg";

/// Extract the display date and image URL from a day-post page.
///
/// The page is expected to carry exactly one date and one storage URL; a
/// page missing either is a data-integrity failure and yields a typed
/// extraction error naming what was absent.
pub fn extract_image_record(year: i32, path: &str, html: &str) -> Result<ImageRecord> {
    let date_pattern = Regex::new(DATE_PATTERN).unwrap();
    let url_pattern = Regex::new(IMAGE_URL_PATTERN).unwrap();

    let date = date_pattern
        .find(html)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Extraction {
            what: "post date",
            path: path.to_string(),
        })?;

    let image_url = url_pattern
        .find(html)
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Extraction {
            what: "image URL",
            path: path.to_string(),
        })?;

    ImageRecord::new(format!("{}年{}", year, date), image_url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POST_PAGE: &str = r#"
        <html><body>
        <h2>02月14日の写真</h2>
        <img src="http://my365.s3.amazonaws.com/store/20190214/600x600/50/abcdef123.jpg">
        </body></html>
    "#;

    #[test]
    fn extracts_date_and_url() {
        let record = extract_image_record(2019, "/someone/p/20190214", POST_PAGE).unwrap();
        assert_eq!(record.date, "2019年02月14日");
        assert_eq!(
            record.image_url,
            "http://my365.s3.amazonaws.com/store/20190214/600x600/50/abcdef123.jpg"
        );
    }

    #[test]
    fn first_date_match_wins() {
        let html = r#"
            03月01日
            03月02日
            http://my365.s3.amazonaws.com/store/20190301/600x600/50/xyz.jpg
        "#;
        let record = extract_image_record(2019, "/someone/p/20190301", html).unwrap();
        assert_eq!(record.date, "2019年03月01日");
    }

    #[test]
    fn missing_date_is_typed_error() {
        let html = r#"http://my365.s3.amazonaws.com/store/20190214/600x600/50/abc.jpg"#;
        let err = extract_image_record(2019, "/someone/p/20190214", html).unwrap_err();
        match err {
            Error::Extraction { what, path } => {
                assert_eq!(what, "post date");
                assert_eq!(path, "/someone/p/20190214");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn missing_url_is_typed_error() {
        let html = "02月14日";
        let err = extract_image_record(2019, "/someone/p/20190214", html).unwrap_err();
        assert!(matches!(err, Error::Extraction { what: "image URL", .. }));
    }

    #[test]
    fn other_buckets_not_matched() {
        let html = r#"
            02月14日
            http://other.s3.amazonaws.com/store/20190214/600x600/50/abc.jpg
        "#;
        assert!(extract_image_record(2019, "/someone/p/20190214", html).is_err());
    }

    #[test]
    fn wrong_size_segment_not_matched() {
        let html = r#"
            02月14日
            http://my365.s3.amazonaws.com/store/20190214/120x120/50/abc.jpg
        "#;
        assert!(extract_image_record(2019, "/someone/p/20190214", html).is_err());
    }
}
