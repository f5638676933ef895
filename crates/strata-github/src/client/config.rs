//! GitHub source configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a GitHub content source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubSourceConfig {
    /// The repository owner (user or organization).
    owner: String,

    /// The repository name.
    repo: String,

    /// The directory path within the repository to load.
    path: String,

    /// Base URL of the API (override for GitHub Enterprise or tests).
    #[serde(default = "default_api_base")]
    api_base: String,

    /// User agent sent with every request. GitHub rejects requests
    /// without one.
    #[serde(default = "default_user_agent")]
    user_agent: String,

    /// Access token for authentication (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    concat!("strata-github/", env!("CARGO_PKG_VERSION")).to_string()
}

impl GithubSourceConfig {
    /// Creates a new builder for GithubSourceConfig.
    pub fn builder() -> GithubSourceConfigBuilder {
        GithubSourceConfigBuilder::default()
    }

    /// Returns the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the tracked directory path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the user agent.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the access token, if configured.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the `owner/repo/path` coordinates as a display label.
    pub fn label(&self) -> String {
        format!("{}/{}/{}", self.owner, self.repo, self.path)
    }
}

/// Builder for GithubSourceConfig.
#[derive(Debug, Default)]
pub struct GithubSourceConfigBuilder {
    owner: Option<String>,
    repo: Option<String>,
    path: Option<String>,
    api_base: Option<String>,
    user_agent: Option<String>,
    token: Option<String>,
}

impl GithubSourceConfigBuilder {
    /// Sets the repository owner.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the repository name.
    pub fn repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    /// Sets the directory path to load.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Overrides the API base URL.
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Overrides the user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the access token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<GithubSourceConfig, &'static str> {
        let owner = self.owner.ok_or("owner is required")?;
        let repo = self.repo.ok_or("repo is required")?;
        let path = self.path.ok_or("path is required")?;

        Ok(GithubSourceConfig {
            owner,
            repo,
            path,
            api_base: self
                .api_base
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or_else(default_api_base),
            user_agent: self.user_agent.unwrap_or_else(default_user_agent),
            token: self.token,
        })
    }
}
