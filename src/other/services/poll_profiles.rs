use std::time::Duration;

use environment::{BATCH_COUNT, POLL_INTERVAL_SECONDS};
use tokio::{task::JoinSet, time::sleep};
use tracing::{event, Level};

use crate::check_profile;

static IDLE_DELAY_SECS: u64 = 5;

/// The poll scheduler. Each cycle re-reads the watchlist, splits it into
/// `BATCH_COUNT` batches, runs one worker per batch and joins them all
/// before sleeping out the poll interval. A worker failure never aborts its
/// siblings.
pub async fn act() {
  event!(Level::INFO, "Now polling watched profiles.");

  loop {
    // Fresh read every cycle: subscription changes from the front end take
    // effect within one cycle, without a restart.
    let watchlist = match repositories::subscription::all_watched().await {
      Ok(watchlist) => watchlist,
      Err(e) => {
        event!(Level::WARN, "Failed to read the watchlist: {e}");
        sleep(Duration::from_secs(IDLE_DELAY_SECS)).await;
        continue;
      }
    };

    if watchlist.is_empty() {
      sleep(Duration::from_secs(IDLE_DELAY_SECS)).await;
      continue;
    }

    event!(
      Level::DEBUG,
      "Starting a poll cycle over {} profiles.",
      watchlist.len()
    );

    let mut set = JoinSet::new();
    for batch in utils::partition(watchlist, *BATCH_COUNT) {
      if !batch.is_empty() {
        set.spawn(check_batch(batch));
      }
    }
    while let Some(res) = set.join_next().await {
      let _ = res.map_err(|e| event!(Level::ERROR, "Failed to join batch worker: {e:?}"));
    }

    sleep(Duration::from_secs(*POLL_INTERVAL_SECONDS)).await;
  }
}

async fn check_batch(batch: Vec<String>) {
  for username in batch {
    check_profile::act(&username).await;
  }
}
