use std::time::Duration;

use lazy_static::lazy_static;
use thiserror::Error as ThisError;

mod entities;
pub use entities::{Profile, Tiktok, TrackedUser};

pub mod fetch_profile;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Profile does not exist upstream")]
  NotFound,
  #[error("API error")]
  Api,
  #[error("Invalid TikTok data")]
  Malformed,
}

static REQUEST_TIMEOUT_SECS: u64 = 30;
static USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:126.0) Gecko/20100101 Firefox/126.0";

lazy_static! {
  static ref CLIENT: reqwest::Client = reqwest::Client::builder()
    .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    .user_agent(USER_AGENT)
    .build()
    .unwrap_or_else(|e| panic!("Failed to build TikTok HTTP client! Error: {e}"));
}
