//! In-memory release source and a one-shot HTTP server for tests

use crate::error::ForgeError;
use crate::forge::{Release, ReleaseAsset, ReleaseSource};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Requests seen by a StaticReleases source: (`owner/repo`, per_page)
pub type RequestLog = Arc<Mutex<Vec<(String, u32)>>>;

/// Serves canned releases per `owner/repo`; unknown repositories are 404s
#[derive(Default)]
pub struct StaticReleases {
    repos: HashMap<String, Option<Vec<Release>>>,
    requests: RequestLog,
}

impl StaticReleases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_releases(mut self, slug: &str, releases: Vec<Release>) -> Self {
        self.repos.insert(slug.to_string(), Some(releases));
        self
    }

    pub fn with_failure(mut self, slug: &str) -> Self {
        self.repos.insert(slug.to_string(), None);
        self
    }

    pub fn requests(&self) -> RequestLog {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl ReleaseSource for StaticReleases {
    fn service_name(&self) -> &'static str {
        "static"
    }

    async fn list_releases(
        &self,
        owner: &str,
        repo: &str,
        per_page: u32,
    ) -> Result<Vec<Release>, ForgeError> {
        let slug = format!("{}/{}", owner, repo);
        self.requests.lock().unwrap().push((slug.clone(), per_page));

        match self.repos.get(&slug) {
            Some(Some(releases)) => Ok(releases.clone()),
            Some(None) => Err(ForgeError::network_error(slug, "connection refused")),
            None => Err(ForgeError::RepositoryNotFound { repo: slug }),
        }
    }
}

/// A published, stable release created on January `day`, published at noon
pub fn release(tag: &str, day: u32, assets: Vec<ReleaseAsset>) -> Release {
    Release {
        tag_name: tag.to_string(),
        draft: false,
        prerelease: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        published_at: Some(Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()),
        assets,
    }
}

pub fn asset(name: &str, size: u64) -> ReleaseAsset {
    ReleaseAsset {
        name: name.to_string(),
        size,
        browser_download_url: format!("https://github.com/octo/app/releases/download/{}", name),
    }
}

/// Answer exactly one HTTP request with `status` and a JSON `body`
///
/// Returns the server's base URL and a handle resolving to the raw request
/// head (request line plus headers).
pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        String::from_utf8_lossy(&head).into_owned()
    });

    (url, handle)
}
