mod help;
mod invalid;
mod list_watched;
mod start;
mod stop;
mod unknown;
mod unwatch;
mod watch;

use std::fmt::Debug;
use std::{future::Future, pin::Pin};

use help::Help;
use invalid::Invalid;
use list_watched::ListWatched;
use start::Start;
use stop::Stop;
use unknown::Unknown;
use unwatch::Unwatch;
use watch::Watch;

pub(crate) type Result<T> = anyhow::Result<T>;
pub(crate) type PinnedFut<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

// The single dialog flow of the front end. A command that needs a follow-up
// message parks its marker state here.
pub(crate) static MAIN_MENU_FLOW: &str = "main_menu";
pub(crate) static AWAITING_WATCH: &str = "awaiting_watch";
pub(crate) static AWAITING_UNWATCH: &str = "awaiting_unwatch";

pub trait Command: Debug {
  /// Runs the command for a chat. `None` means no reply should be sent.
  fn process(self: Box<Self>, chat_id: i64) -> PinnedFut<Result<Option<String>>>;
  fn box_dyn(self) -> Box<dyn Command + Send>
  where
    Self: Sized + Send + 'static,
  {
    Box::new(self) as Box<dyn Command + Send>
  }
}

/// Parses one incoming message into a command. Plain text is only meaningful
/// as the continuation of a pending dialog.
///
/// # Errors
///
/// Fails when the dialog state cannot be read.
pub async fn parse(text: &str, chat_id: i64) -> Result<Box<dyn Command + Send>> {
  let text = text.trim();
  if !text.starts_with('/') {
    return continue_dialog(text, chat_id).await;
  }

  let mut parts = text.split_whitespace();
  #[allow(clippy::unwrap_used)] // Checked above
  let command = parts.next().unwrap().to_lowercase();
  let names = parse_usernames(parts);

  let res = match command.as_str() {
    "/start" => Start.box_dyn(),
    "/stop" => Stop.box_dyn(),
    "/help" => Help.box_dyn(),
    "/list" => ListWatched.box_dyn(),
    "/watch" => Watch(names).box_dyn(),
    "/unwatch" => Unwatch(names).box_dyn(),
    _ => Unknown.box_dyn(),
  };
  Ok(res)
}

async fn continue_dialog(text: &str, chat_id: i64) -> Result<Box<dyn Command + Send>> {
  let state = repositories::conversation::get_state(MAIN_MENU_FLOW, chat_id).await?;
  let names = parse_usernames(text.split_whitespace());
  let res = match state.as_deref() {
    Some(state) if state == AWAITING_WATCH => Watch(names).box_dyn(),
    Some(state) if state == AWAITING_UNWATCH => Unwatch(names).box_dyn(),
    _ => Invalid.box_dyn(),
  };
  Ok(res)
}

/// Normalizes a whitespace-split username list: leading `@` stripped,
/// lowercased, anything outside the platform's username alphabet dropped.
fn parse_usernames<'a, I: Iterator<Item = &'a str>>(parts: I) -> Vec<String> {
  parts
    .map(|part| part.trim_start_matches('@'))
    .filter(|name| {
      !name.is_empty()
        && name
          .chars()
          .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
    })
    .map(str::to_lowercase)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::{parse, parse_usernames};

  #[test]
  fn usernames_are_normalized_and_filtered() {
    let names = parse_usernames("@Alice bob.2 user! @@both.at charlie_d".split_whitespace());
    assert_eq!(names, vec!["alice", "bob.2", "both.at", "charlie_d"]);
  }

  #[test]
  fn empty_input_yields_no_usernames() {
    assert!(parse_usernames("".split_whitespace()).is_empty());
    assert!(parse_usernames("@ !!!".split_whitespace()).is_empty());
  }

  #[tokio::test]
  async fn slash_commands_dispatch_without_touching_dialog_state() {
    let watch = parse("/watch @Alice", 1).await.unwrap();
    assert_eq!(format!("{watch:?}"), r#"Watch(["alice"])"#);

    let unknown = parse("/frobnicate", 1).await.unwrap();
    assert_eq!(format!("{unknown:?}"), "Unknown");

    let help = parse("  /help  ", 1).await.unwrap();
    assert_eq!(format!("{help:?}"), "Help");
  }

  #[tokio::test]
  async fn case_is_ignored_for_the_command_word() {
    let watch = parse("/Watch bob", 1).await.unwrap();
    assert_eq!(format!("{watch:?}"), r#"Watch(["bob"])"#);
  }
}
