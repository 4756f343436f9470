use reqwest::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use url::Url;

use super::PageSource;
use crate::config::ScrapeConfig;
use crate::errors::SourceError;

/// A course page fetched over HTTP(S).
///
/// Pages behind a login are reached by passing the browser's session cookie.
/// There is no retry; a timeout or non-success status fails the scan.
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: Client,
}

impl HttpSource {
    /// Build a source for `url` with the timeout, user agent and cookie from
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed, the cookie is not a valid
    /// header value, or the client cannot be built.
    pub fn new(url: &str, config: &ScrapeConfig) -> Result<Self, SourceError> {
        let url = Url::parse(url)?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = config.cookie() {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| SourceError::InvalidCookie(e.to_string()))?;
            headers.insert(COOKIE, value);
        }

        let mut builder = Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            url,
            client: builder.build()?,
        })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PageSource for HttpSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn load_html(&self) -> Result<String, SourceError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Fetching {} returned {}", self.url, status);
            return Err(SourceError::Status {
                url: self.url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Test operation should succeed");
        let addr = listener.local_addr().expect("Test operation should succeed");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("Test operation should succeed");
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.expect("Test operation should succeed");
                request.extend_from_slice(&buf[..n]);
                if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let response = format!(
                "{status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("Test operation should succeed");
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}/projects/212"), handle)
    }

    #[tokio::test]
    async fn test_fetches_page_with_cookie() {
        let (url, server) = serve_once("HTTP/1.1 200 OK", "<h2>Tasks</h2>").await;
        let config = ScrapeConfig::builder()
            .cookie("_session=abc")
            .build()
            .expect("Test operation should succeed");

        let html = HttpSource::new(&url, &config)
            .expect("Test operation should succeed")
            .load_html()
            .await
            .expect("Test operation should succeed");
        assert_eq!(html, "<h2>Tasks</h2>");

        let request = server.await.expect("Test operation should succeed").to_lowercase();
        assert!(request.starts_with("get /projects/212 "));
        assert!(request.contains("cookie: _session=abc"));
        assert!(request.contains("user-agent: readme-scrape/"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let (url, server) = serve_once("HTTP/1.1 404 Not Found", "gone").await;

        let err = HttpSource::new(&url, &ScrapeConfig::default())
            .expect("Test operation should succeed")
            .load_html()
            .await
            .expect_err("404 must fail");
        assert!(matches!(err, SourceError::Status { status: 404, .. }));
        let _ = server.await;
    }

    #[test]
    fn test_rejects_malformed_url() {
        assert!(matches!(
            HttpSource::new("https://exa mple.com", &ScrapeConfig::default()),
            Err(SourceError::InvalidUrl(_))
        ));
    }
}
