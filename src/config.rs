use std::env;

use anyhow::Result;

use crate::tracker::client::DEFAULT_PAGE_SIZE;
use crate::tracker::models::Identity;

/// Upper bound on the search page size; most trackers cap lower anyway.
const MAX_PAGE_SIZE: usize = 1000;

/// Central configuration loaded from environment variables.
///
/// Credentials come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Base URL of the tracker, e.g. https://tracker.example.com
    pub tracker_url: String,
    /// Service user for the project listing and for CLI runs.
    pub tracker_user: String,
    /// API token (or password) for `tracker_user`. Optional for trackers
    /// that allow anonymous browsing.
    pub tracker_api_token: Option<String>,
    /// Issues requested per search page when paging through results.
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Only the page size has a default. The tracker URL is checked
    /// separately by `require_tracker` so `--help` works without it.
    pub fn load() -> Result<Self> {
        let page_size = match env::var("TRACKER_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            tracker_url: env::var("TRACKER_URL").unwrap_or_default(),
            tracker_user: env::var("TRACKER_USER").unwrap_or_default(),
            tracker_api_token: env::var("TRACKER_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            page_size,
        })
    }

    /// Check that the tracker URL is configured.
    /// Call this before any operation that talks to the tracker.
    pub fn require_tracker(&self) -> Result<()> {
        if self.tracker_url.is_empty() {
            anyhow::bail!(
                "TRACKER_URL not set. Add it to your .env file.\n\
                 Example: TRACKER_URL=https://tracker.example.com"
            );
        }
        if !self.tracker_url.starts_with("http://") && !self.tracker_url.starts_with("https://") {
            anyhow::bail!(
                "TRACKER_URL must start with http:// or https:// (got {})",
                self.tracker_url
            );
        }
        Ok(())
    }

    /// The identity configured for this process.
    pub fn service_identity(&self) -> Identity {
        Identity::new(self.tracker_user.clone(), self.tracker_api_token.clone())
    }
}

/// Parse TRACKER_PAGE_SIZE, clamping into 1..=MAX_PAGE_SIZE.
fn parse_page_size(raw: &str) -> Result<usize> {
    let size: usize = raw.trim().parse().map_err(|_| {
        anyhow::anyhow!("TRACKER_PAGE_SIZE must be a positive integer (got {raw:?})")
    })?;
    Ok(size.clamp(1, MAX_PAGE_SIZE))
}
