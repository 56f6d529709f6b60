use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
/// Startup fails with a readable error if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job-search backend, e.g. `http://localhost:8000`.
    pub api_url: String,
    /// Name of the search endpoint under the base URL. Deployments rename
    /// this between `search_jobs` and experimental variants.
    pub search_endpoint: String,
    /// Maximum number of jobs requested per search.
    pub search_limit: u32,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_url: require_env("SEARCH_API_URL")?,
            search_endpoint: std::env::var("SEARCH_ENDPOINT")
                .unwrap_or_else(|_| "search_jobs".to_string()),
            search_limit: std::env::var("SEARCH_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("SEARCH_LIMIT must be a positive integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
