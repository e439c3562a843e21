use tiktok::Tiktok;
use tracing::{event, Level};

/// Fans one new item out to every chat subscribed to its author. The
/// subscriber set is resolved here, at notification time, so an unsubscribe
/// between fetch and notify is respected.
pub async fn act(item: &Tiktok) {
  let chats = match repositories::subscription::watchers_of(&item.user_id).await {
    Ok(chats) => chats,
    Err(e) => {
      event!(
        Level::WARN,
        "Failed to resolve subscribers of {}: {e}",
        item.user_id
      );
      return;
    }
  };

  let text = format_notification(item);
  for chat_id in chats {
    if let Err(e) = telegram::send_message::act(chat_id, &text, true).await {
      event!(Level::WARN, "(Notice) Failed to notify chat {chat_id}: {e}");
    }
  }
}

fn format_notification(item: &Tiktok) -> String {
  format!(
    "@{} has posted a new video, check it out!\nDescription: {}\nhttps://www.tiktok.com/@{}/video/{}",
    item.user_id, item.description, item.user_id, item.id
  )
}

#[cfg(test)]
mod tests {
  use chrono::DateTime;
  use tiktok::Tiktok;

  use super::format_notification;

  #[test]
  fn notification_carries_author_description_and_link() {
    let item = Tiktok {
      id: 7_000_000_000_000_000_001,
      user_id: "alice".to_string(),
      description: "hello world".to_string(),
      time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    };

    let text = format_notification(&item);
    assert!(text.starts_with("@alice"));
    assert!(text.contains("hello world"));
    assert!(text.contains("https://www.tiktok.com/@alice/video/7000000000000000001"));
  }
}
