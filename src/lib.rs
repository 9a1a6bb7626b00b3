//! Client for the Twitter v1.1 REST API.
//!
//! Covers application rate-limit status and the two timestamp encodings the
//! API uses (epoch seconds and Ruby date strings). Each call is one HTTP
//! round trip; retries, backoff and pagination are left to the caller.
//!
//! ```no_run
//! use twitter_client::{Client, Config, RateLimitStatusParams};
//!
//! # async fn example() -> Result<(), twitter_client::Error> {
//! let client = Client::new(&Config::from_env()?)?;
//! let params = RateLimitStatusParams::new(["users", "statuses"]);
//! let status = client.applications().rate_limit_status(Some(&params)).await?;
//! if let Some(rl) = status.get("statuses", "/statuses/mentions_timeline") {
//!     println!("{}/{} until {}", rl.remaining, rl.limit, rl.reset);
//! }
//! # Ok(())
//! # }
//! ```

pub mod applications;
pub mod config;
pub mod errors;
pub mod http;
pub mod time;
pub mod types;

pub use applications::{
    ApplicationService, RateLimitContext, RateLimitStatus, RateLimitStatusParams,
};
pub use config::Config;
pub use errors::{ApiError, Error, ErrorDetail, TimeError};
pub use http::Client;
pub use time::{EpochTime, Time};
pub use types::RateLimit;
