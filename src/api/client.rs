//! Diary service HTTP client.

use std::time::Duration;

use reqwest::{header, redirect, Client, Response};

use crate::error::{Error, Result};

/// HTTP status the login endpoint answers with on success.
const LOGIN_REDIRECT_STATUS: u16 = 302;

/// Name of the session cookie issued on login.
const SESSION_COOKIE: &str = "SESSID";

/// Diary service client holding the base URL, account, and session cookie.
///
/// All request state lives here; nothing is process-global. Page fetches go
/// through a redirect-following client, while login and image fetches use a
/// client with redirects disabled so the original response is observed.
pub struct DiaryClient {
    pages: Client,
    bare: Client,
    host: String,
    account: String,
    session_id: String,
}

impl DiaryClient {
    /// Log in to the diary service and return an authenticated client.
    ///
    /// Sends a form POST to `<host>/login` with redirects disabled. Success
    /// requires HTTP 302 and a `SESSID` cookie in the response; anything
    /// else is a fatal authentication error.
    pub async fn login(host: &str, account: &str, password: &str) -> Result<Self> {
        let pages = Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let bare = Client::builder()
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        let url = format!("{}/login", host);
        tracing::debug!("POST {}", url);

        // Without language=ja the service answers in English and the
        // date extraction pattern no longer matches.
        let response = bare
            .post(&url)
            .header(header::COOKIE, "language=ja")
            .form(&[("user", account), ("password", password)])
            .send()
            .await?;

        let status = response.status().as_u16();
        let session_id = response
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| c.value().to_string());

        let session_id = validate_login_response(status, session_id)?;
        tracing::debug!("Obtained session cookie ({} chars)", session_id.len());

        Ok(Self {
            pages,
            bare,
            host: host.trim_end_matches('/').to_string(),
            account: account.to_string(),
            session_id,
        })
    }

    /// Account ID this client is logged in as.
    pub fn account(&self) -> &str {
        &self.account
    }

    /// Session cookie value obtained at login.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Fetch the calendar page for a `yyyymm` month key.
    pub async fn month_page(&self, yyyymm: &str) -> Result<String> {
        let path = format!("/{}/{}", self.account, yyyymm);
        self.page(&path).await
    }

    /// Fetch a single day-post page by its path (e.g. `/<account>/p/20190214`).
    pub async fn post_page(&self, path: &str) -> Result<String> {
        self.page(path).await
    }

    /// Make an authenticated GET request for an HTML page.
    async fn page(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.host, path);
        tracing::debug!("GET {}", url);

        let response = self
            .pages
            .get(&url)
            .header(header::COOKIE, self.session_cookies())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::PageFetch {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetch an image from its storage URL.
    ///
    /// Unauthenticated, redirects disabled, explicit timeout. Success
    /// requires HTTP 200 and an image content type; the validated response
    /// is returned for the caller to stream to disk.
    pub async fn fetch_image(&self, url: &str, timeout: Duration) -> Result<Response> {
        tracing::debug!("GET {}", url);

        let response = self.bare.get(url).timeout(timeout).send().await?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());

        check_image_response(url, status, content_type.as_deref())?;

        Ok(response)
    }

    /// Cookie header value for authenticated page requests.
    fn session_cookies(&self) -> String {
        format!("{}={}; language=ja", SESSION_COOKIE, self.session_id)
    }
}

/// Validate a login response: HTTP 302 with a session cookie present.
///
/// Returns the session cookie value. Kept free of HTTP types so the
/// success and failure paths are testable without a server.
pub fn validate_login_response(status: u16, session_id: Option<String>) -> Result<String> {
    if status != LOGIN_REDIRECT_STATUS {
        return Err(Error::AuthenticationStatus(status));
    }

    session_id.ok_or(Error::AuthenticationCookie)
}

/// Validate an image response: HTTP 200 with an image content type.
pub fn check_image_response(url: &str, status: u16, content_type: Option<&str>) -> Result<()> {
    if status != 200 {
        return Err(Error::DownloadStatus {
            url: url.to_string(),
            status,
        });
    }

    let content_type = content_type.unwrap_or_default();
    if !content_type.contains("image") {
        return Err(Error::DownloadContentType {
            url: url.to_string(),
            content_type: content_type.to_string(),
        });
    }

    Ok(())
}
