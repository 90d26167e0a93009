//! Image record representation.

use crate::error::{Error, Result};

/// One collected post: the display date and the image storage URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Display date, e.g. `2019年02月14日`.
    pub date: String,

    /// Storage URL the image bytes are fetched from.
    pub image_url: String,
}

impl ImageRecord {
    /// Create a record. Both fields must be non-empty.
    pub fn new(date: String, image_url: String) -> Result<Self> {
        if date.is_empty() {
            return Err(Error::Manifest("record date must not be empty".to_string()));
        }

        if image_url.is_empty() {
            return Err(Error::Manifest(
                "record image URL must not be empty".to_string(),
            ));
        }

        Ok(Self { date, image_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_fields() {
        assert!(ImageRecord::new(String::new(), "http://x/y.jpg".to_string()).is_err());
        assert!(ImageRecord::new("2019年02月14日".to_string(), String::new()).is_err());
    }

    #[test]
    fn keeps_fields_unmodified() {
        let record = ImageRecord::new(
            "2019年02月14日".to_string(),
            "http://my365.s3.amazonaws.com/store/20190214/600x600/50/abc.jpg".to_string(),
        )
        .unwrap();

        assert_eq!(record.date, "2019年02月14日");
        assert!(record.image_url.ends_with("abc.jpg"));
    }
}
