use repositories::{conversation, subscription};

use super::{Command, PinnedFut, Result, AWAITING_UNWATCH, MAIN_MENU_FLOW};

/// Unsubscribes the chat from the given usernames. Removal is idempotent, so
/// a repeated or mistaken name is simply ignored.
#[derive(Debug)]
pub struct Unwatch(pub Vec<String>);
impl Command for Unwatch {
  fn process(self: Box<Self>, chat_id: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move {
      let names = self.0;
      if names.is_empty() {
        conversation::set_state(MAIN_MENU_FLOW, chat_id, AWAITING_UNWATCH).await?;
        return Ok(Some(
          "Which profiles should I stop watching? Send their usernames separated by spaces."
            .to_string(),
        ));
      }

      subscription::remove_watch(chat_id, &names).await?;
      conversation::clear_state(MAIN_MENU_FLOW, chat_id).await?;

      Ok(Some(names.into_iter().fold(
        "No longer watching:".to_string(),
        |acc, name| format!("{acc}\n- @{name}"),
      )))
    })
  }
}
