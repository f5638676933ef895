//! The Contents API transport wrapper.

use async_trait::async_trait;
use reqwest::header;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::debug;

use super::config::GithubSourceConfig;
use super::payload::{decode_file_content, ContentsPayload, EntryKind};
use crate::error::SourceError;
use crate::source::{DirectoryFetch, RepoContents};

/// Media type for the Contents API JSON representation.
const ACCEPT_JSON: &str = "application/vnd.github+json";

/// Pinned API version, sent with every request.
const API_VERSION: &str = "2022-11-28";

/// Stateless client for the GitHub Contents API.
///
/// Holds no state between calls beyond the connection pool; conditional
/// request markers are supplied by the caller per call.
pub struct GithubContentClient {
    http: Client,
    config: GithubSourceConfig,
}

impl GithubContentClient {
    /// Creates a client for the given source configuration.
    pub fn new(config: GithubSourceConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Creates a client reusing an existing HTTP client.
    pub fn with_http_client(http: Client, config: GithubSourceConfig) -> Self {
        Self { http, config }
    }

    /// Returns the source configuration.
    pub fn config(&self) -> &GithubSourceConfig {
        &self.config
    }

    fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.config.api_base(),
            self.config.owner(),
            self.config.repo(),
            path
        )
    }

    fn request(&self, path: &str) -> RequestBuilder {
        let mut req = self
            .http
            .get(self.contents_url(path))
            .header(header::ACCEPT, ACCEPT_JSON)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header(header::USER_AGENT, self.config.user_agent());

        if let Some(token) = self.config.token() {
            req = req.bearer_auth(token);
        }

        req
    }
}

#[async_trait]
impl RepoContents for GithubContentClient {
    async fn fetch_directory(
        &self,
        if_none_match: Option<&str>,
    ) -> Result<DirectoryFetch, SourceError> {
        let mut req = self.request(self.config.path());
        if let Some(marker) = if_none_match {
            req = req.header(header::IF_NONE_MATCH, marker);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status == StatusCode::NOT_MODIFIED {
            return Ok(DirectoryFetch::NotModified);
        }

        if !status.is_success() {
            return Err(SourceError::transport(status.as_u16()));
        }

        let etag = resp
            .headers()
            .get(header::ETAG)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        match resp.json::<ContentsPayload>().await? {
            ContentsPayload::Listing(entries) => {
                debug!(
                    "directory {} listed with {} entries",
                    self.config.path(),
                    entries.len()
                );
                Ok(DirectoryFetch::Changed { entries, etag })
            }
            ContentsPayload::Entry(_) => Err(SourceError::NotADirectory),
        }
    }

    async fn fetch_file(&self, path: &str) -> Result<Option<String>, SourceError> {
        let resp = self.request(path).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(SourceError::transport(status.as_u16()));
        }

        match resp.json::<ContentsPayload>().await? {
            // The path resolved to a directory since the listing was taken.
            ContentsPayload::Listing(_) => Ok(None),
            ContentsPayload::Entry(file) if file.kind == EntryKind::File => {
                Ok(Some(decode_file_content(&file)?))
            }
            ContentsPayload::Entry(_) => Ok(None),
        }
    }
}

impl std::fmt::Debug for GithubContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubContentClient")
            .field("source", &self.config.label())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_base: &str) -> GithubContentClient {
        GithubContentClient::new(
            GithubSourceConfig::builder()
                .owner("org")
                .repo("content")
                .path("docs")
                .api_base(api_base)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_contents_url() {
        let client = client("https://api.github.com");
        assert_eq!(
            client.contents_url("docs/a.md"),
            "https://api.github.com/repos/org/content/contents/docs/a.md"
        );
    }

    #[test]
    fn test_contents_url_with_enterprise_base() {
        let client = client("https://github.example.com/api/v3");
        assert_eq!(
            client.contents_url("docs"),
            "https://github.example.com/api/v3/repos/org/content/contents/docs"
        );
    }
}
