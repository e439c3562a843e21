use repositories::conversation;

use super::{Command, PinnedFut, Result, MAIN_MENU_FLOW};

#[derive(Debug)]
pub struct Start;
impl Command for Start {
  fn process(self: Box<Self>, chat_id: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move {
      conversation::clear_state(MAIN_MENU_FLOW, chat_id).await?;

      Ok(Some(
        "\
Hi! I watch TikTok profiles and message you whenever one of them posts \
a new video.
Use /watch to add profiles, /list to see your watchlist, and /help for \
everything else.\
        "
        .to_string(),
      ))
    })
  }
}
