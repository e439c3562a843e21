//! # `Help` command.
//!
//! Returns a hard-coded message listing the signature of every command.

use super::{Command, PinnedFut, Result};

#[derive(Debug)]
pub struct Help;
impl Command for Help {
  fn process(self: Box<Self>, _: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move {
      Ok(Some(
        "\
Available commands:
- /watch user_1 user_2 (...)
- /unwatch user_1 user_2 (...)
- /list
- /stop
- /help\
        "
        .to_string(),
      ))
    })
  }
}
