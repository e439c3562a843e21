use std::cmp;

/// Splits a watchlist into `batch_count` near-equal batches, handing the
/// leftover elements to the first batches so no two sizes differ by more
/// than one. Order is preserved across the concatenated batches.
#[must_use]
pub fn partition<T>(items: Vec<T>, batch_count: usize) -> Vec<Vec<T>> {
  let count = cmp::max(batch_count, 1);
  let base = items.len() / count;
  let extra = items.len() % count;

  let mut iter = items.into_iter();
  (0..count)
    .map(|i| {
      let size = base + usize::from(i < extra);
      iter.by_ref().take(size).collect()
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::partition;

  #[test]
  fn batch_sizes_differ_by_at_most_one() {
    for total in 0..40 {
      for count in 1..10 {
        let items: Vec<u32> = (0..total).collect();
        let batches = partition(items, count);
        assert_eq!(batches.len(), count);

        let min = batches.iter().map(Vec::len).min().unwrap();
        let max = batches.iter().map(Vec::len).max().unwrap();
        assert!(max - min <= 1, "sizes {min}..{max} for {total} into {count}");
      }
    }
  }

  #[test]
  fn concatenation_preserves_the_original_list() {
    let items: Vec<&str> = vec!["alice", "bob", "carol", "dave", "erin"];
    let flattened: Vec<&str> = partition(items.clone(), 3).into_iter().flatten().collect();
    assert_eq!(flattened, items);
  }

  #[test]
  fn extra_elements_go_to_the_first_batches() {
    let batches = partition((0..7).collect::<Vec<_>>(), 3);
    assert_eq!(batches[0], vec![0, 1, 2]);
    assert_eq!(batches[1], vec![3, 4]);
    assert_eq!(batches[2], vec![5, 6]);
  }

  #[test]
  fn more_batches_than_items_leaves_trailing_batches_empty() {
    let batches = partition(vec![1, 2], 4);
    assert_eq!(batches, vec![vec![1], vec![2], vec![], vec![]]);
  }

  #[test]
  fn zero_batches_is_clamped_to_one() {
    let batches = partition(vec![1, 2, 3], 0);
    assert_eq!(batches, vec![vec![1, 2, 3]]);
  }
}
