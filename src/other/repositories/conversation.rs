//! Dialog state for the command front end, one value per
//! `(flow_name, chat_id)` pair.

use crate::Database;

/// # Errors
///
/// Returns an error if the query fails.
pub async fn get_state(flow_name: &str, chat_id: i64) -> sqlx::Result<Option<String>> {
  sqlx::query_scalar("SELECT state FROM conversations WHERE flow_name = $1 AND chat_id = $2")
    .bind(flow_name)
    .bind(chat_id)
    .fetch_optional(Database::get_pool().await)
    .await
}

/// # Errors
///
/// Returns an error if the query fails.
pub async fn set_state(flow_name: &str, chat_id: i64, state: &str) -> sqlx::Result<()> {
  sqlx::query(
    "INSERT INTO conversations (flow_name, chat_id, state)
     VALUES ($1, $2, $3)
     ON CONFLICT (flow_name, chat_id) DO UPDATE SET state = EXCLUDED.state",
  )
  .bind(flow_name)
  .bind(chat_id)
  .bind(state)
  .execute(Database::get_pool().await)
  .await?;

  Ok(())
}

/// Clearing an absent state is a no-op.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn clear_state(flow_name: &str, chat_id: i64) -> sqlx::Result<()> {
  sqlx::query("DELETE FROM conversations WHERE flow_name = $1 AND chat_id = $2")
    .bind(flow_name)
    .bind(chat_id)
    .execute(Database::get_pool().await)
    .await?;

  Ok(())
}
