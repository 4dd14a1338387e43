//! Sequential scan over a small window
//! 小窗口上的顺序扫描

use crate::{Timed, cmp};

/// First index in `li[left..=right]` whose key equals `target`
/// `li[left..=right]` 中第一个键等于 `target` 的位置
#[must_use]
pub fn linear<T: Timed>(li: &[T], left: usize, right: usize, target: &str) -> Option<usize> {
  let end = right.saturating_add(1).min(li.len());
  if left >= end {
    return None;
  }
  li[left..end]
    .iter()
    .position(|r| cmp(r.ts(), target).is_eq())
    .map(|p| left + p)
}
