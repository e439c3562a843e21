use crate::Database;

/// Upserts the sender of an incoming message, remembering their most recent
/// chat.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn upsert(
  user_id: i64,
  chat_id: i64,
  username: Option<&str>,
  first_name: Option<&str>,
  last_name: Option<&str>,
) -> sqlx::Result<()> {
  sqlx::query(
    "INSERT INTO bot_users (user_id, chat_id, username, first_name, last_name)
     VALUES ($1, $2, $3, $4, $5)
     ON CONFLICT (user_id) DO UPDATE SET
       chat_id = EXCLUDED.chat_id,
       username = EXCLUDED.username,
       first_name = EXCLUDED.first_name,
       last_name = EXCLUDED.last_name",
  )
  .bind(user_id)
  .bind(chat_id)
  .bind(username)
  .bind(first_name)
  .bind(last_name)
  .execute(Database::get_pool().await)
  .await?;

  Ok(())
}
