use async_trait::async_trait;
use reqwest::{Client, Response};
use tracing::debug;

use crate::config::HttpClientConfig;
use crate::errors::{SourceError, SourceResult};
use crate::utils::url::UrlUtils;
use crate::utils::DecompressionService;

/// Downloads playlist text for a URL
///
/// The catalog service only depends on this trait, so tests can hand it a
/// canned playlist instead of a network client.
#[async_trait]
pub trait PlaylistFetcher: Send + Sync {
    /// Fetch URL and return decompressed text content
    async fn fetch_text(&self, url: &str) -> SourceResult<String>;
}

/// reqwest-backed fetcher with automatic gzip detection
pub struct StandardHttpClient {
    client: Client,
}

impl StandardHttpClient {
    pub fn from_config(config: &HttpClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout()?)
            .timeout(config.request_timeout()?)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    fn request_error(error: reqwest::Error, url: &str) -> SourceError {
        if error.is_timeout() {
            SourceError::Timeout {
                url: UrlUtils::obfuscate_credentials(url),
            }
        } else {
            SourceError::Request {
                message: UrlUtils::obfuscate_credentials(&error.to_string()),
            }
        }
    }

    /// Process response with automatic decompression
    async fn process_response_to_bytes(response: Response, url: &str) -> SourceResult<Vec<u8>> {
        if !response.status().is_success() {
            return Err(SourceError::Http {
                status: response.status().as_u16(),
                url: UrlUtils::obfuscate_credentials(url),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::request_error(e, url))?;

        debug!("Fetched {} bytes of raw content", bytes.len());

        let decompressed_bytes = DecompressionService::decompress(bytes)
            .map_err(|e| SourceError::decode(format!("{e:#}")))?;

        debug!("Processed {} bytes of content", decompressed_bytes.len());

        Ok(decompressed_bytes)
    }
}

#[async_trait]
impl PlaylistFetcher for StandardHttpClient {
    async fn fetch_text(&self, url: &str) -> SourceResult<String> {
        debug!("Fetching playlist from: {}", UrlUtils::obfuscate_credentials(url));

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::request_error(e, url))?;

        let bytes = Self::process_response_to_bytes(response, url).await?;

        // Invalid UTF-8 sequences become U+FFFD
        let content = String::from_utf8_lossy(&bytes).into_owned();

        debug!("Fetched {} characters of playlist text", content.len());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response on a random local port
    async fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let head = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(head.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
        });

        format!("http://{addr}/list.m3u")
    }

    fn client() -> StandardHttpClient {
        StandardHttpClient::from_config(&HttpClientConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_text_success() {
        let url = serve_once("200 OK", b"#EXTM3U\n".to_vec()).await;
        assert_eq!(client().fetch_text(&url).await.unwrap(), "#EXTM3U\n");
    }

    #[tokio::test]
    async fn test_fetch_text_http_error() {
        let url = serve_once("404 Not Found", Vec::new()).await;
        let error = client().fetch_text(&url).await.unwrap_err();
        assert!(matches!(error, SourceError::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_text_lossy_utf8() {
        let url = serve_once("200 OK", b"#EXTM3U\n#EXTINF:-1,Caf\xe9\n".to_vec()).await;
        let text = client().fetch_text(&url).await.unwrap();
        assert!(text.starts_with("#EXTM3U\n#EXTINF:-1,Caf"));
    }

    #[cfg(feature = "compression-gzip")]
    #[tokio::test]
    async fn test_fetch_text_gzip_body() {
        use flate2::{Compression, write::GzEncoder};
        use std::io::Write;

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"#EXTM3U\n#EXTINF:-1,A\nhttp://a/b.ts\n").unwrap();
        let url = serve_once("200 OK", encoder.finish().unwrap()).await;

        assert_eq!(
            client().fetch_text(&url).await.unwrap(),
            "#EXTM3U\n#EXTINF:-1,A\nhttp://a/b.ts\n"
        );
    }
}
