use crate::errors::Error;
use crate::http::Client;
use crate::types::RateLimit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

pub const RATE_LIMIT_STATUS_PATH: &str = "application/rate_limit_status.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitContext {
    #[serde(default)]
    pub access_token: String,
    // Present instead of access_token for application-only auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

/// Rate limits for every endpoint, keyed by resource family then endpoint
/// path (`resources["statuses"]["/statuses/mentions_timeline"]`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitStatus {
    #[serde(default)]
    pub rate_limit_context: RateLimitContext,
    #[serde(default)]
    pub resources: BTreeMap<String, BTreeMap<String, RateLimit>>,
}

impl RateLimitStatus {
    pub fn get(&self, family: &str, endpoint: &str) -> Option<&RateLimit> {
        self.resources.get(family)?.get(endpoint)
    }
}

/// Filter for [`ApplicationService::rate_limit_status`]. Sent as a single
/// comma-joined `resources` parameter, in the given order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitStatusParams {
    pub resources: Vec<String>,
}

impl RateLimitStatusParams {
    pub fn new<I, S>(resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }

    /// Query string for these params, or `None` when there is nothing to send.
    pub fn to_query(&self) -> Option<String> {
        if self.resources.is_empty() {
            return None;
        }
        let joined = self
            .resources
            .iter()
            .map(|r| urlencoding::encode(r).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        Some(format!("resources={}", joined))
    }
}

/// Endpoints under `application/`.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationService<'a> {
    client: &'a Client,
}

impl<'a> ApplicationService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn rate_limit_status_url(
        &self,
        params: Option<&RateLimitStatusParams>,
    ) -> Result<Url, Error> {
        let mut url = self.client.endpoint(RATE_LIMIT_STATUS_PATH)?;
        url.set_query(params.and_then(RateLimitStatusParams::to_query).as_deref());
        Ok(url)
    }

    /// Rate limits for this application (or the user it acts for).
    /// Requires a user auth context.
    /// https://developer.twitter.com/en/docs/twitter-api/v1/developer-utilities/rate-limit-status/api-reference/get-application-rate_limit_status
    pub async fn rate_limit_status(
        &self,
        params: Option<&RateLimitStatusParams>,
    ) -> Result<RateLimitStatus, Error> {
        let url = self.rate_limit_status_url(params)?;
        self.client.get_json(url).await
    }
}
