use chrono::{DateTime, Utc};

/// Profile metadata for a tracked TikTok account.
#[derive(Debug, Clone)]
pub struct TrackedUser {
  pub unique_id: String,
  pub nickname: String,
  pub followers: i64,
  pub following: i64,
  pub heart_count: i64,
  pub video_count: i64,
}

/// A single published video.
#[derive(Debug, Clone)]
pub struct Tiktok {
  pub id: i64,
  /// `unique_id` of the author.
  pub user_id: String,
  pub description: String,
  pub time: DateTime<Utc>,
}

/// A fetched profile: metadata plus its most recent items, newest first as
/// returned by the upstream feed.
#[derive(Debug, Clone)]
pub struct Profile {
  pub user: TrackedUser,
  pub items: Vec<Tiktok>,
}
