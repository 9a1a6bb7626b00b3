use crate::time::EpochTime;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

pub const RATE_LIMIT_LIMIT: &str = "x-rate-limit-limit";
pub const RATE_LIMIT_REMAINING: &str = "x-rate-limit-remaining";
pub const RATE_LIMIT_RESET: &str = "x-rate-limit-reset";

// Quota snapshot for one endpoint, shared by response bodies and headers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: i64,
    pub remaining: i64,
    pub reset: EpochTime,
}

impl RateLimit {
    /// Reads the `x-rate-limit-*` headers Twitter sends with each response.
    /// Returns `None` unless all three are present and numeric.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<i64>().ok())
        };
        Some(Self {
            limit: read(RATE_LIMIT_LIMIT)?,
            remaining: read(RATE_LIMIT_REMAINING)?,
            reset: EpochTime::from_timestamp(read(RATE_LIMIT_RESET)?),
        })
    }
}
