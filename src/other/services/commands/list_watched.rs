use repositories::subscription;

use super::{Command, PinnedFut, Result};

#[derive(Debug)]
pub struct ListWatched;
impl Command for ListWatched {
  fn process(self: Box<Self>, chat_id: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move {
      let watched = subscription::watched_by(chat_id).await?;
      if watched.is_empty() {
        return Ok(Some("You're not watching any profiles.".to_string()));
      }

      Ok(Some(watched.into_iter().fold(
        "You're currently watching:".to_string(),
        |acc, name| format!("{acc}\n- @{name}"),
      )))
    })
  }
}
