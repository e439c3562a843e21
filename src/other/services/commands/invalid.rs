use super::{Command, PinnedFut, Result};

/// Plain text with no pending dialog. Nothing to do and nothing to say.
#[derive(Debug)]
pub struct Invalid;
impl Command for Invalid {
  fn process(self: Box<Self>, _: i64) -> PinnedFut<Result<Option<String>>> {
    Box::pin(async move { Ok(None) })
  }
}
