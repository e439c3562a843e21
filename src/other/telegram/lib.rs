use std::time::Duration;

use lazy_static::lazy_static;
use serde::Deserialize;
use thiserror::Error as ThisError;

use environment::BOT_TOKEN;

pub mod get_updates;
pub mod send_message;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("API error")]
  Api,
  #[error("Chat is no longer reachable")]
  ChatUnreachable,
}

// Must outlive the long-poll window of get_updates.
static REQUEST_TIMEOUT_SECS: u64 = 90;

lazy_static! {
  static ref CLIENT: reqwest::Client = reqwest::Client::builder()
    .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    .build()
    .unwrap_or_else(|e| panic!("Failed to build Telegram HTTP client! Error: {e}"));
}

fn method_url(method: &str) -> String {
  format!("https://api.telegram.org/bot{}/{method}", *BOT_TOKEN)
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
  ok: bool,
  result: Option<T>,
  error_code: Option<i64>,
  description: Option<String>,
}
