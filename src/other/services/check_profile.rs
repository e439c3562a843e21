use chrono::Utc;
use tracing::{event, Level};

use crate::{diff, notify_subscribers};

/// The fetch-and-diff unit of work for one username. Every failure is
/// contained here, so a batch worker can always move on to its next
/// username.
pub async fn act(username: &str) {
  let profile = match tiktok::fetch_profile::act(username).await {
    Err(tiktok::Error::NotFound) => {
      event!(Level::WARN, "{username} no longer exists upstream. Skipping.");
      return;
    }
    Err(tiktok::Error::Api) => {
      event!(
        Level::WARN,
        "Transient error fetching {username}. Will retry next cycle."
      );
      return;
    }
    Err(tiktok::Error::Malformed) => {
      event!(Level::ERROR, "Unusable payload for {username}. Skipping.");
      return;
    }
    Ok(profile) => profile,
  };

  if let Err(e) = repositories::tracked_user::upsert(&profile.user).await {
    event!(Level::WARN, "Failed to upsert profile {username}: {e}");
    return;
  }

  let watermark = match repositories::tiktok::last_timestamp(username).await {
    // A profile with no persisted items was just added to the watchlist;
    // starting at "now" keeps its history from being reported as new.
    Ok(stored) => stored.unwrap_or_else(Utc::now),
    Err(e) => {
      event!(Level::WARN, "Failed to read watermark for {username}: {e}");
      return;
    }
  };

  for item in diff::new_items(profile.items, watermark) {
    event!(Level::DEBUG, "New item {} from {username}.", item.id);
    if let Err(e) = repositories::tiktok::upsert(&item).await {
      // The watermark stays put, so this item and everything newer is
      // retried next cycle.
      event!(
        Level::WARN,
        "Failed to persist item {} of {username}: {e}",
        item.id
      );
      break;
    }
    notify_subscribers::act(&item).await;
  }
}
