use chrono::DateTime;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{event, Level};

use crate::{Error, Profile, Tiktok, TrackedUser, CLIENT};

// Status codes inside the payload body, distinct from the HTTP status.
static BODY_STATUS_OK: i64 = 0;
static BODY_STATUS_NOT_FOUND: i64 = 10_202;

/// Fetches the current profile metadata and most recent items of a user.
///
/// # Errors
///
/// `NotFound` when the username no longer exists upstream, `Api` on
/// network/rate-limit trouble, `Malformed` when the payload cannot be
/// interpreted.
pub async fn act(username: &str) -> Result<Profile, Error> {
  let url = format!("https://www.tiktok.com/node/share/user/@{username}");
  let response = CLIENT.get(url).send().await.map_err(|e| {
    event!(Level::WARN, "Failed to reach TikTok for {username}: {e}");
    Error::Api
  })?;

  match response.status() {
    StatusCode::NOT_FOUND => return Err(Error::NotFound),
    status if !status.is_success() => {
      event!(
        Level::WARN,
        "TikTok returned status {status} for {username}."
      );
      return Err(Error::Api);
    }
    _ => {}
  }

  let payload = response.json::<Payload>().await.map_err(|e| {
    event!(
      Level::WARN,
      "Failed to decode TikTok payload for {username}: {e}"
    );
    Error::Malformed
  })?;

  parse(payload)
}

#[derive(Debug, Deserialize)]
struct Payload {
  #[serde(rename = "statusCode", default)]
  status_code: i64,
  #[serde(rename = "userInfo")]
  user_info: Option<UserInfo>,
  #[serde(default)]
  items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
  user: UserData,
  stats: Stats,
}

#[derive(Debug, Deserialize)]
struct UserData {
  #[serde(rename = "uniqueId")]
  unique_id: String,
  nickname: String,
}

#[derive(Debug, Deserialize)]
struct Stats {
  #[serde(rename = "followerCount")]
  follower_count: i64,
  #[serde(rename = "followingCount")]
  following_count: i64,
  #[serde(rename = "heartCount")]
  heart_count: i64,
  #[serde(rename = "videoCount")]
  video_count: i64,
}

#[derive(Debug, Deserialize)]
struct Item {
  id: String,
  #[serde(default)]
  desc: String,
  #[serde(rename = "createTime")]
  create_time: i64,
}

fn parse(payload: Payload) -> Result<Profile, Error> {
  if payload.status_code == BODY_STATUS_NOT_FOUND {
    return Err(Error::NotFound);
  }
  if payload.status_code != BODY_STATUS_OK {
    event!(
      Level::WARN,
      "TikTok payload carried status {}.",
      payload.status_code
    );
    return Err(Error::Api);
  }

  let Some(UserInfo { user, stats }) = payload.user_info else {
    event!(Level::WARN, "TikTok payload carried no userInfo.");
    return Err(Error::Malformed);
  };

  let tracked = TrackedUser {
    unique_id: user.unique_id,
    nickname: user.nickname,
    followers: stats.follower_count,
    following: stats.following_count,
    heart_count: stats.heart_count,
    video_count: stats.video_count,
  };

  let mut items = Vec::with_capacity(payload.items.len());
  for item in payload.items {
    let id = item.id.parse::<i64>().map_err(|_| {
      event!(Level::WARN, "Received non-numeric item id: {:?}", item.id);
      Error::Malformed
    })?;
    let time = DateTime::from_timestamp(item.create_time, 0).ok_or_else(|| {
      event!(
        Level::WARN,
        "Received out-of-range createTime: {}",
        item.create_time
      );
      Error::Malformed
    })?;
    items.push(Tiktok {
      id,
      user_id: tracked.unique_id.clone(),
      description: item.desc,
      time,
    });
  }

  Ok(Profile {
    user: tracked,
    items,
  })
}

#[cfg(test)]
mod tests {
  use super::{parse, Payload};
  use crate::Error;

  fn decode(json: &str) -> Payload {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn full_payload_parses_into_profile_and_items() {
    let payload = decode(
      r#"{
        "statusCode": 0,
        "userInfo": {
          "user": {"uniqueId": "alice", "nickname": "Alice"},
          "stats": {"followerCount": 10, "followingCount": 2, "heartCount": 300, "videoCount": 4}
        },
        "items": [
          {"id": "7000000000000000002", "desc": "newest", "createTime": 1700000200},
          {"id": "7000000000000000001", "desc": "older", "createTime": 1700000100}
        ]
      }"#,
    );

    let profile = parse(payload).unwrap();
    assert_eq!(profile.user.unique_id, "alice");
    assert_eq!(profile.user.followers, 10);
    assert_eq!(profile.items.len(), 2);
    assert_eq!(profile.items[0].id, 7_000_000_000_000_000_002);
    assert_eq!(profile.items[0].user_id, "alice");
    assert_eq!(profile.items[0].time.timestamp(), 1_700_000_200);
  }

  #[test]
  fn body_not_found_status_maps_to_not_found() {
    let payload = decode(r#"{"statusCode": 10202}"#);
    assert!(matches!(parse(payload), Err(Error::NotFound)));
  }

  #[test]
  fn missing_user_info_is_malformed() {
    let payload = decode(r#"{"statusCode": 0, "items": []}"#);
    assert!(matches!(parse(payload), Err(Error::Malformed)));
  }

  #[test]
  fn non_numeric_item_id_is_malformed() {
    let payload = decode(
      r#"{
        "statusCode": 0,
        "userInfo": {
          "user": {"uniqueId": "alice", "nickname": "Alice"},
          "stats": {"followerCount": 0, "followingCount": 0, "heartCount": 0, "videoCount": 0}
        },
        "items": [{"id": "not-a-number", "desc": "", "createTime": 1700000000}]
      }"#,
    );
    assert!(matches!(parse(payload), Err(Error::Malformed)));
  }
}
