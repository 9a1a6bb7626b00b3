use crate::applications::ApplicationService;
use crate::config::Config;
use crate::errors::{relevant_error, Error};
use crate::types::RateLimit;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

pub fn build_client(cfg: &Config) -> Result<reqwest::Client, Error> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(USER_AGENT, HeaderValue::from_str(&cfg.user_agent)?);
    default_headers.insert(AUTHORIZATION, auth_header(&cfg.token)?);
    let builder = reqwest::Client::builder()
        .default_headers(default_headers)
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .use_rustls_tls();
    Ok(builder.build()?)
}

fn auth_header(token: &str) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
    value.set_sensitive(true);
    Ok(value)
}

// Url::join drops the last path segment unless the base ends in '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Twitter API client. Holds an already-authenticated transport and the base
/// URL endpoint paths are resolved against; carries no other state.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Builds a bearer-token client from configuration.
    pub fn new(cfg: &Config) -> Result<Self, Error> {
        let base_url = Url::parse(&cfg.api_url)?;
        Ok(Self::with_http_client(build_client(cfg)?, base_url))
    }

    /// Wraps a caller-supplied transport. Authentication headers (OAuth1
    /// signing, app-only bearer, ...) are the transport's responsibility.
    pub fn with_http_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: with_trailing_slash(base_url),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn applications(&self) -> ApplicationService<'_> {
        ApplicationService::new(self)
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Sends a GET and decodes the JSON body. Non-2xx responses become
    /// [`Error::Api`] when the body carries a structured error, and
    /// [`Error::Http`] otherwise.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let res = self
            .http
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(|e| {
                warn!("GET {} error sending request: {}", url, e);
                Error::Transport(e)
            })?;

        let status = res.status();
        if let Some(rate) = RateLimit::from_headers(res.headers()) {
            debug!(
                "GET {} rate limit: {}/{} remaining, resets at {}",
                url.path(),
                rate.remaining,
                rate.limit,
                rate.reset
            );
        }
        let body = res.text().await?;

        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }
        debug!("GET {} failed with status {}", url.path(), status);
        Err(relevant_error(status, body))
    }
}
