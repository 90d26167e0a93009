//! Day-post link extraction from calendar pages.

use regex::Regex;

/// Extract every day-post path (`/<account>/p/<8-digit-date>`) from a
/// calendar page body.
///
/// Matches are returned in page order; duplicates are preserved. A month
/// with no posts yields an empty vector, which is not an error.
pub fn day_post_paths(account: &str, html: &str) -> Vec<String> {
    let pattern = Regex::new(&format!("/{}/p/[0-9]{{8}}", regex::escape(account))).unwrap();

    pattern
        .find_iter(html)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_yields_no_paths() {
        assert!(day_post_paths("someone", "<html><body>no posts</body></html>").is_empty());
    }

    #[test]
    fn paths_in_page_order() {
        let html = r#"
            <a href="/someone/p/20190201">1</a>
            <a href="/someone/p/20190214">14</a>
            <a href="/someone/p/20190228">28</a>
        "#;

        assert_eq!(
            day_post_paths("someone", html),
            vec![
                "/someone/p/20190201",
                "/someone/p/20190214",
                "/someone/p/20190228",
            ]
        );
    }

    #[test]
    fn duplicates_preserved() {
        let html = r#"
            <a href="/someone/p/20190201">thumb</a>
            <a href="/someone/p/20190201">link</a>
        "#;

        assert_eq!(
            day_post_paths("someone", html),
            vec!["/someone/p/20190201", "/someone/p/20190201"]
        );
    }

    #[test]
    fn other_accounts_ignored() {
        let html = r#"
            <a href="/someone/p/20190201">mine</a>
            <a href="/other/p/20190202">theirs</a>
        "#;

        assert_eq!(day_post_paths("someone", html), vec!["/someone/p/20190201"]);
    }

    #[test]
    fn short_dates_ignored() {
        let html = r#"<a href="/someone/p/2019020">bad</a>"#;
        assert!(day_post_paths("someone", html).is_empty());
    }

    #[test]
    fn account_is_escaped() {
        // A regex metacharacter in the account must not change the pattern.
        let html = r#"<a href="/aXb/p/20190201">x</a>"#;
        assert!(day_post_paths("a.b", html).is_empty());
    }
}
