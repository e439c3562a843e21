use crate::Database;

/// Subscribes a chat to every username in `unique_ids`. The whole add is one
/// transaction, so no partial multi-username add is ever visible. Re-adding
/// an existing pair is a no-op.
///
/// # Errors
///
/// Returns an error if a query or the commit fails.
pub async fn add_watch(chat_id: i64, unique_ids: &[String]) -> sqlx::Result<()> {
  let mut tx = Database::get_tx().await?;
  for unique_id in unique_ids {
    sqlx::query(
      "INSERT INTO subscriptions (unique_id, chat_id)
       VALUES ($1, $2)
       ON CONFLICT (unique_id, chat_id) DO NOTHING",
    )
    .bind(unique_id)
    .bind(chat_id)
    .execute(&mut *tx)
    .await?;
  }
  tx.commit().await
}

/// Unsubscribes a chat from every username in `unique_ids`. Removing a pair
/// that does not exist is a no-op.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn remove_watch(chat_id: i64, unique_ids: &[String]) -> sqlx::Result<()> {
  sqlx::query("DELETE FROM subscriptions WHERE chat_id = $1 AND unique_id = ANY($2)")
    .bind(chat_id)
    .bind(unique_ids)
    .execute(Database::get_pool().await)
    .await?;

  Ok(())
}

/// Every username the given chat is subscribed to.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn watched_by(chat_id: i64) -> sqlx::Result<Vec<String>> {
  sqlx::query_scalar("SELECT unique_id FROM subscriptions WHERE chat_id = $1 ORDER BY unique_id")
    .bind(chat_id)
    .fetch_all(Database::get_pool().await)
    .await
}

/// Every chat currently subscribed to the given username.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn watchers_of(unique_id: &str) -> sqlx::Result<Vec<i64>> {
  sqlx::query_scalar("SELECT chat_id FROM subscriptions WHERE unique_id = $1")
    .bind(unique_id)
    .fetch_all(Database::get_pool().await)
    .await
}

/// The full watchlist: every username with at least one subscription.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn all_watched() -> sqlx::Result<Vec<String>> {
  sqlx::query_scalar("SELECT DISTINCT unique_id FROM subscriptions ORDER BY unique_id")
    .fetch_all(Database::get_pool().await)
    .await
}
