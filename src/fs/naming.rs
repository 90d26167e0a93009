//! Destination filename generation.

use url::Url;

use crate::error::{Error, Result};

/// Final path segment of a URL, query string excluded.
pub fn url_basename(url: &str) -> Result<String> {
    let parsed = Url::parse(url)?;

    let name = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();

    if name.is_empty() {
        return Err(Error::InvalidFilename(format!(
            "URL has no file component: '{}'",
            url
        )));
    }

    Ok(name.to_string())
}

/// Destination filename for a downloaded image: `<date>_<basename-of-url>`.
pub fn image_filename(date: &str, url: &str) -> Result<String> {
    sanitize_filename(&format!("{}_{}", date, url_basename(url)?))
}

/// Validate and sanitize a filename by removing or replacing invalid characters.
///
/// Returns an error if the filename contains path traversal patterns.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    // Sanitize remaining problematic characters
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basename_of_storage_url() {
        assert_eq!(
            url_basename("http://my365.s3.amazonaws.com/store/20190214/600x600/50/abc123.jpg")
                .unwrap(),
            "abc123.jpg"
        );
    }

    #[test]
    fn basename_ignores_query_string() {
        assert_eq!(
            url_basename("http://example.org/path/file.jpg?token=x").unwrap(),
            "file.jpg"
        );
    }

    #[test]
    fn basename_rejects_directory_url() {
        assert!(url_basename("http://example.org/path/").is_err());
        assert!(url_basename("http://example.org").is_err());
    }

    #[test]
    fn image_filename_joins_date_and_basename() {
        assert_eq!(
            image_filename(
                "2019年02月14日",
                "http://my365.s3.amazonaws.com/store/20190214/600x600/50/abc123.jpg"
            )
            .unwrap(),
            "2019年02月14日_abc123.jpg"
        );
    }

    #[test]
    fn sanitize_replaces_reserved_characters() {
        assert_eq!(sanitize_filename("file:name.jpg").unwrap(), "file_name.jpg");
        assert_eq!(
            sanitize_filename("file*with?special.jpg").unwrap(),
            "file_with_special.jpg"
        );
    }

    #[test]
    fn sanitize_rejects_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("a/b.jpg").is_err());
        assert!(sanitize_filename("a\0b.jpg").is_err());
    }

    #[test]
    fn sanitize_rejects_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }
}
