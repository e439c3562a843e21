use std::{cmp, time::Duration};

use tokio::time::sleep;
use tracing::{event, Level};

// Retries sleep 1s, 2s, .. up to BACKOFF_CAP_SECS between attempts, and give
// up entirely once roughly GIVE_UP_MINUTES have been spent waiting.
static BACKOFF_CAP_SECS: u64 = 60;
static GIVE_UP_MINUTES: u64 = 30;
static MAX_FAILURES: u64 = {
  let ramp_up_secs = BACKOFF_CAP_SECS * (BACKOFF_CAP_SECS + 1) / 2;
  let budget_secs = GIVE_UP_MINUTES * 60;
  if budget_secs < ramp_up_secs {
    BACKOFF_CAP_SECS
  } else {
    BACKOFF_CAP_SECS + (budget_secs - ramp_up_secs) / BACKOFF_CAP_SECS
  }
};

/// Sleeps for an incrementing amount of time after a failed API call.
///
/// Returns whether the caller should give up on the operation because the
/// failure streak has exhausted the retry budget.
pub async fn handle_api_failure(failures_in_a_row: &mut u64) -> bool {
  if *failures_in_a_row >= MAX_FAILURES {
    event!(Level::ERROR, "Maximum retries reached! Aborting...");
    return true;
  }

  *failures_in_a_row += 1;
  sleep(Duration::from_secs(cmp::min(
    *failures_in_a_row,
    BACKOFF_CAP_SECS,
  )))
  .await;

  false
}
