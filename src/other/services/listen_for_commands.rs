use tracing::{event, Level};
use utils::handle_api_failure;

use telegram::get_updates::{self, Message};

use crate::commands;

/// Long-polls the messaging front end for incoming messages and dispatches
/// them as commands.
#[allow(clippy::cognitive_complexity)]
pub async fn act() {
  event!(Level::INFO, "Now listening for subscriber commands.");

  let mut offset = None;
  let mut failures_in_a_row = 0;

  loop {
    let updates = match get_updates::act(offset).await {
      Err(e) => {
        event!(Level::WARN, "Error fetching updates: {e}");
        if handle_api_failure(&mut failures_in_a_row).await {
          break;
        }
        continue;
      }
      Ok(updates) => updates,
    };
    failures_in_a_row = 0;

    for update in updates {
      offset = Some(update.update_id + 1);
      if let Some(message) = update.message {
        handle_message(message).await;
      }
    }
  }

  event!(Level::WARN, "Commands are no longer being processed...");
}

async fn handle_message(message: Message) {
  let chat_id = message.chat.id;

  // Keep the chat row fresh on every message; subscriptions and dialog
  // state reference it.
  let persisted = repositories::chat::upsert(
    chat_id,
    message.chat.title.as_deref(),
    message.chat.description.as_deref(),
    None,
  )
  .await;
  if let Err(e) = persisted {
    event!(Level::WARN, "Failed to persist chat {chat_id}: {e}");
    return;
  }

  if let Some(sender) = &message.from {
    let persisted = repositories::bot_user::upsert(
      sender.id,
      chat_id,
      sender.username.as_deref(),
      sender.first_name.as_deref(),
      sender.last_name.as_deref(),
    )
    .await;
    if let Err(e) = persisted {
      event!(Level::WARN, "Failed to persist sender {}: {e}", sender.id);
    }
  }

  let Some(text) = message.text else { return };
  let reply = match commands::parse(&text, chat_id).await {
    Ok(command) => command.process(chat_id).await,
    Err(e) => Err(e),
  };

  match reply {
    Ok(Some(reply)) => {
      if let Err(e) = telegram::send_message::act(chat_id, &reply, true).await {
        event!(Level::WARN, "(Notice) Failed to reply to chat {chat_id}: {e}");
      }
    }
    Ok(None) => {}
    Err(e) => {
      event!(
        Level::WARN,
        "(Notice) Failed to process command from chat {chat_id}: {e}"
      );
    }
  }
}
