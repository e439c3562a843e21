use repositories::conversation;

use super::{Command, PinnedFut, Result, MAIN_MENU_FLOW};

/// Cancels whatever dialog is pending. Subscriptions are kept; `/unwatch`
/// removes those.
#[derive(Debug)]
pub struct Stop;
impl Command for Stop {
  fn process(self: Box<Self>, chat_id: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move {
      conversation::clear_state(MAIN_MENU_FLOW, chat_id).await?;

      Ok(Some(
        "Okay, cancelled. Your subscriptions are untouched; use /unwatch to remove them."
          .to_string(),
      ))
    })
  }
}
