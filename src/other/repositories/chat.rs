use crate::Database;

/// Upserts a chat row from the latest incoming update. The avatar reference
/// is only overwritten when a new one is provided.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn upsert(
  chat_id: i64,
  title: Option<&str>,
  description: Option<&str>,
  photo: Option<&str>,
) -> sqlx::Result<()> {
  sqlx::query(
    "INSERT INTO chats (chat_id, title, description, photo)
     VALUES ($1, $2, $3, $4)
     ON CONFLICT (chat_id) DO UPDATE SET
       title = EXCLUDED.title,
       description = EXCLUDED.description,
       photo = COALESCE(EXCLUDED.photo, chats.photo)",
  )
  .bind(chat_id)
  .bind(title)
  .bind(description)
  .bind(photo)
  .execute(Database::get_pool().await)
  .await?;

  Ok(())
}
