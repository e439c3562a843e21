use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use crate::{method_url, Envelope, Error, CLIENT};

static LONG_POLL_SECS: u64 = 25;

#[derive(Debug, Deserialize)]
pub struct Update {
  pub update_id: i64,
  pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
  pub chat: Chat,
  pub from: Option<Sender>,
  pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
  pub id: i64,
  pub title: Option<String>,
  pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Sender {
  pub id: i64,
  pub username: Option<String>,
  pub first_name: Option<String>,
  pub last_name: Option<String>,
}

#[derive(Serialize)]
struct Input {
  timeout: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  offset: Option<i64>,
  allowed_updates: [&'static str; 1],
}

/// Long-polls the Bot API for new updates past `offset`.
///
/// # Errors
///
/// `Api` on any transport or Bot API failure.
pub async fn act(offset: Option<i64>) -> Result<Vec<Update>, Error> {
  let input = Input {
    timeout: LONG_POLL_SECS,
    offset,
    allowed_updates: ["message"],
  };
  let response = CLIENT
    .post(method_url("getUpdates"))
    .json(&input)
    .send()
    .await
    .map_err(|e| {
      event!(Level::WARN, "Failed to reach Telegram: {e}");
      Error::Api
    })?;

  let envelope = response.json::<Envelope<Vec<Update>>>().await.map_err(|e| {
    event!(Level::WARN, "Failed to decode getUpdates response: {e}");
    Error::Api
  })?;

  if !envelope.ok {
    event!(
      Level::WARN,
      "getUpdates failed: {:?} {:?}",
      envelope.error_code,
      envelope.description
    );
    return Err(Error::Api);
  }

  Ok(envelope.result.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use crate::Envelope;

  use super::Update;

  #[test]
  fn decodes_a_message_update() {
    let envelope: Envelope<Vec<Update>> = serde_json::from_str(
      r#"{
        "ok": true,
        "result": [{
          "update_id": 12345,
          "message": {
            "message_id": 7,
            "chat": {"id": -100200, "title": "informer test", "type": "group"},
            "from": {"id": 42, "username": "alice", "first_name": "Alice"},
            "text": "/watch charlidamelio"
          }
        }]
      }"#,
    )
    .unwrap();

    assert!(envelope.ok);
    let updates = envelope.result.unwrap();
    assert_eq!(updates[0].update_id, 12345);
    let message = updates[0].message.as_ref().unwrap();
    assert_eq!(message.chat.id, -100_200);
    assert_eq!(message.text.as_deref(), Some("/watch charlidamelio"));
    assert_eq!(message.from.as_ref().unwrap().id, 42);
  }

  #[test]
  fn decodes_an_error_envelope() {
    let envelope: Envelope<Vec<Update>> = serde_json::from_str(
      r#"{"ok": false, "error_code": 401, "description": "Unauthorized"}"#,
    )
    .unwrap();

    assert!(!envelope.ok);
    assert_eq!(envelope.error_code, Some(401));
  }
}
