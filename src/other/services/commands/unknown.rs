use super::{Command, PinnedFut, Result};

#[derive(Debug)]
pub struct Unknown;
impl Command for Unknown {
  fn process(self: Box<Self>, _: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move { Ok(Some("Unknown command. Try /help.".to_string())) })
  }
}
