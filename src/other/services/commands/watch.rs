use repositories::{conversation, subscription};

use super::{Command, PinnedFut, Result, AWAITING_WATCH, MAIN_MENU_FLOW};

/// Subscribes the chat to the given usernames. Without arguments it opens a
/// dialog and waits for the username list in the next message.
#[derive(Debug)]
pub struct Watch(pub Vec<String>);
impl Command for Watch {
  fn process(self: Box<Self>, chat_id: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move {
      let names = self.0;
      if names.is_empty() {
        conversation::set_state(MAIN_MENU_FLOW, chat_id, AWAITING_WATCH).await?;
        return Ok(Some(
          "Which profiles should I watch? Send their usernames separated by spaces.".to_string(),
        ));
      }

      subscription::add_watch(chat_id, &names).await?;
      conversation::clear_state(MAIN_MENU_FLOW, chat_id).await?;

      Ok(Some(names.into_iter().fold(
        "Now watching:".to_string(),
        |acc, name| format!("{acc}\n- @{name}"),
      )))
    })
  }
}
