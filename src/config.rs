use crate::errors::Error;
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.twitter.com/1.1/";

/// Runtime configuration for the Twitter API client.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - TWITTER_BEARER_TOKEN [required]
    /// - TWITTER_API_URL (default: https://api.twitter.com/1.1/)
    /// - TWITTER_HTTP_TIMEOUT_SECS (default: 30)
    /// - TWITTER_USER_AGENT (default: twitter-client/<version>)
    pub fn from_env() -> Result<Self, Error> {
        let token = env::var("TWITTER_BEARER_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingConfig("TWITTER_BEARER_TOKEN"))?;

        let api_url = env::var("TWITTER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout_secs = env::var("TWITTER_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);
        let user_agent = env::var("TWITTER_USER_AGENT")
            .unwrap_or_else(|_| format!("twitter-client/{}", env!("CARGO_PKG_VERSION")));

        Ok(Self {
            token,
            api_url,
            user_agent,
            timeout_secs,
        })
    }
}
