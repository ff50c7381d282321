//! GitHub REST API directory client.

use crate::error::Result;
use async_trait::async_trait;
use intake_core::{DirectoryClient, Lookup};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Directory lookups backed by the GitHub REST v3 API.
pub struct GitHubDirectory {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubDirectory {
    /// Create a client against the public GitHub API.
    pub fn new(token: Option<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL, token)
    }

    /// Create a client against a custom API endpoint (GitHub Enterprise,
    /// or a mock server in tests).
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("repo-intake")
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Issue a GET and fold the response into a [`Lookup`].
    async fn lookup(&self, path: &str) -> Lookup {
        let url = format!("{}{path}", self.base_url);
        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Lookup::Found
                } else if status == StatusCode::NOT_FOUND {
                    Lookup::NotFound
                } else {
                    debug!(%url, %status, "directory lookup failed");
                    Lookup::Failed(Some(status.as_u16()))
                }
            }
            Err(e) => {
                debug!(%url, error = %e, "directory request error");
                Lookup::Failed(e.status().map(|s| s.as_u16()))
            }
        }
    }
}

#[async_trait]
impl DirectoryClient for GitHubDirectory {
    async fn get_org(&self, org: &str) -> Lookup {
        self.lookup(&format!("/orgs/{org}")).await
    }

    async fn get_repo(&self, owner: &str, repo: &str) -> Lookup {
        self.lookup(&format!("/repos/{owner}/{repo}")).await
    }

    async fn get_team(&self, org: &str, team_slug: &str) -> Lookup {
        self.lookup(&format!("/orgs/{org}/teams/{team_slug}")).await
    }
}
