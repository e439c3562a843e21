use chrono::{DateTime, Utc};
use tiktok::Tiktok;

use crate::Database;

/// Upserts a single item by its platform-assigned id.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn upsert(item: &Tiktok) -> sqlx::Result<()> {
  sqlx::query(
    "INSERT INTO tiktoks (id, user_id, description, time)
     VALUES ($1, $2, $3, $4)
     ON CONFLICT (id) DO UPDATE SET
       user_id = EXCLUDED.user_id,
       description = EXCLUDED.description,
       time = EXCLUDED.time",
  )
  .bind(item.id)
  .bind(&item.user_id)
  .bind(&item.description)
  .bind(item.time)
  .execute(Database::get_pool().await)
  .await?;

  Ok(())
}

/// The persisted watermark: timestamp of the newest item already observed
/// for a username, if any was ever persisted.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn last_timestamp(unique_id: &str) -> sqlx::Result<Option<DateTime<Utc>>> {
  sqlx::query_scalar("SELECT MAX(time) FROM tiktoks WHERE user_id = $1")
    .bind(unique_id)
    .fetch_one(Database::get_pool().await)
    .await
}
