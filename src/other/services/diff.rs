use chrono::{DateTime, Utc};
use tiktok::Tiktok;

/// Orders a fetched item list oldest-first and keeps only the items strictly
/// newer than the watermark. Processing the result in order means the
/// watermark advances monotonically, and a failure partway through leaves a
/// resumable boundary.
#[must_use]
pub fn new_items(mut items: Vec<Tiktok>, watermark: DateTime<Utc>) -> Vec<Tiktok> {
  items.sort_by_key(|item| item.time);
  items.retain(|item| item.time > watermark);
  items
}

#[cfg(test)]
mod tests {
  use chrono::{DateTime, Utc};
  use tiktok::Tiktok;

  use super::new_items;

  fn item(id: i64, secs: i64) -> Tiktok {
    Tiktok {
      id,
      user_id: "alice".to_string(),
      description: String::new(),
      time: DateTime::from_timestamp(secs, 0).unwrap(),
    }
  }

  fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
  }

  #[test]
  fn everything_newer_than_the_watermark_survives_oldest_first() {
    // Upstream returns newest-first.
    let fetched = vec![item(3, 300), item(2, 200), item(1, 100)];

    let fresh = new_items(fetched, at(0));
    let ids: Vec<i64> = fresh.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
  }

  #[test]
  fn items_at_or_below_the_watermark_are_dropped() {
    let fetched = vec![item(3, 300), item(2, 200), item(1, 100)];

    let fresh = new_items(fetched, at(200));
    let ids: Vec<i64> = fresh.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3], "equal timestamps are not new");
  }

  #[test]
  fn unchanged_upstream_data_produces_nothing_on_the_second_cycle() {
    let fetched = vec![item(3, 300), item(2, 200), item(1, 100)];

    // First cycle advances the watermark to the newest item.
    let first = new_items(fetched.clone(), at(0));
    let watermark = first.last().unwrap().time;

    assert!(new_items(fetched, watermark).is_empty());
  }

  #[test]
  fn empty_fetch_is_fine() {
    assert!(new_items(Vec::new(), at(100)).is_empty());
  }
}
