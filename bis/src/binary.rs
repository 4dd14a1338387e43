//! Classical binary search, the bounded fallback
//! 经典二分查找，有界的回退方案

use std::cmp::Ordering;

use crate::{Timed, cmp};

/// Halving search in `li[left..=right]`, O(log size)
/// 在 `li[left..=right]` 内折半查找，O(log size)
#[must_use]
pub fn binary<T: Timed>(li: &[T], left: usize, right: usize, target: &str) -> Option<usize> {
  if li.is_empty() {
    return None;
  }
  let mut left = left;
  // Half-open upper bound avoids underflow when the window closes at 0
  // 半开上界，避免窗口在 0 处关闭时下溢
  let mut end = right.min(li.len() - 1) + 1;

  while left < end {
    let mid = left + (end - 1 - left) / 2;
    match cmp(target, li[mid].ts()) {
      Ordering::Equal => return Some(mid),
      Ordering::Greater => left = mid + 1,
      Ordering::Less => end = mid,
    }
  }
  None
}

/// Binary search over the whole slice
/// 在整个切片上二分查找
#[inline]
#[must_use]
pub fn binary_all<T: Timed>(li: &[T], target: &str) -> Option<usize> {
  if li.is_empty() {
    return None;
  }
  binary(li, 0, li.len() - 1, target)
}
