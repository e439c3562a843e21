use tiktok::TrackedUser;

use crate::Database;

/// Upserts profile metadata by username.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn upsert(user: &TrackedUser) -> sqlx::Result<()> {
  sqlx::query(
    "INSERT INTO users (unique_id, nickname, followers_cnt, following_cnt, heart_cnt, video_cnt)
     VALUES ($1, $2, $3, $4, $5, $6)
     ON CONFLICT (unique_id) DO UPDATE SET
       nickname = EXCLUDED.nickname,
       followers_cnt = EXCLUDED.followers_cnt,
       following_cnt = EXCLUDED.following_cnt,
       heart_cnt = EXCLUDED.heart_cnt,
       video_cnt = EXCLUDED.video_cnt",
  )
  .bind(&user.unique_id)
  .bind(&user.nickname)
  .bind(user.followers)
  .bind(user.following)
  .bind(user.heart_count)
  .bind(user.video_count)
  .execute(Database::get_pool().await)
  .await?;

  Ok(())
}
