//! GitHub lookup client — the single point of entry for the external
//! profile-reputation API.
//!
//! ARCHITECTURAL RULE: no other module may call the GitHub API directly.
//! The profile verifier consumes this through the `ProfileLookup` trait so
//! its fail-soft policy is testable with an injected fake.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const LOOKUP_TIMEOUT_SECS: u64 = 10;
/// GitHub rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("sift-api/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },
}

/// The subset of the user-lookup payload the verifier scores on.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileStats {
    pub public_repos: u32,
    pub followers: u32,
    /// `YYYY-MM-DDTHH:MM:SSZ` in the wire payload.
    pub created_at: DateTime<Utc>,
}

/// Narrow lookup seam in front of the external API.
///
/// Carried in `AppState` as `Arc<dyn ProfileLookup>`; tests swap in a fake
/// implementation instead of mocking the network.
#[async_trait]
pub trait ProfileLookup: Send + Sync {
    async fn lookup(&self, username: &str) -> Result<ProfileStats, LookupError>;
}

/// Live client against the GitHub users API.
///
/// One attempt per lookup, bounded by a request timeout. A timed-out or
/// failed lookup degrades to an unverified signal upstream; retrying here
/// would only stretch analysis latency for a weak signal.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(LOOKUP_TIMEOUT_SECS))
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl ProfileLookup for GithubClient {
    async fn lookup(&self, username: &str) -> Result<ProfileStats, LookupError> {
        let url = format!("{}/users/{username}", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Api {
                status: status.as_u16(),
            });
        }

        let stats: ProfileStats = response.json().await?;
        debug!(
            "GitHub lookup succeeded for {username}: repos={}, followers={}",
            stats.public_repos, stats.followers
        );
        Ok(stats)
    }
}
