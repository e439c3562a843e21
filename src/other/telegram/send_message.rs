use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{event, Level};

use crate::{method_url, Envelope, Error, CLIENT};

#[derive(Serialize)]
struct Input<'a> {
  chat_id: i64,
  text: &'a str,
  disable_web_page_preview: bool,
}

/// Delivers one message to one chat.
///
/// # Errors
///
/// `ChatUnreachable` when the chat has blocked the bot or no longer exists,
/// `Api` on any transient Bot API failure.
pub async fn act(chat_id: i64, text: &str, disable_web_page_preview: bool) -> Result<(), Error> {
  let input = Input {
    chat_id,
    text,
    disable_web_page_preview,
  };
  let response = CLIENT
    .post(method_url("sendMessage"))
    .json(&input)
    .send()
    .await
    .map_err(|e| {
      event!(Level::WARN, "Failed to reach Telegram: {e}");
      Error::Api
    })?;

  if response.status() == StatusCode::FORBIDDEN {
    return Err(Error::ChatUnreachable);
  }

  let envelope = response.json::<Envelope<Value>>().await.map_err(|e| {
    event!(Level::WARN, "Failed to decode sendMessage response: {e}");
    Error::Api
  })?;

  if envelope.ok {
    return Ok(());
  }
  if envelope.error_code == Some(403) {
    return Err(Error::ChatUnreachable);
  }

  event!(
    Level::WARN,
    "sendMessage to {chat_id} failed: {:?} {:?}",
    envelope.error_code,
    envelope.description
  );
  Err(Error::Api)
}
