//! In-place quicksort by timestamp
//! 按时间戳原地快速排序
//!
//! Middle pivot, two converging scan pointers, not stable.
//! 中间元素为枢轴，双指针相向扫描，不稳定。
//!
//! Partitions are kept on an explicit stack. The larger side is pushed and
//! the smaller side handled next, so the stack holds O(log n) ranges even on
//! adversarial input.
//! 分区保存在显式栈中。较大一侧入栈，较小一侧先处理，
//! 因此即使输入恶劣，栈深度也只有 O(log n)。

#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use crate::{Timed, cmp, cmp_ts};

/// Sort ascending by timestamp
/// 按时间戳升序排序
pub fn sort<T: Timed>(li: &mut [T]) {
  if li.len() < 2 {
    return;
  }

  let mut stack: Vec<(usize, usize)> = Vec::new();
  let mut todo = Some((0, li.len() - 1));

  while let Some((lo, hi)) = todo.take().or_else(|| stack.pop()) {
    if lo >= hi {
      continue;
    }

    let (left_end, right_start) = partition(li, lo, hi);

    // Empty sides are dropped here, the rest goes smaller first
    // 空侧在此丢弃，其余按小侧优先处理
    let left = (lo as isize) < left_end;
    let right = right_start < hi;
    match (left, right) {
      (true, true) => {
        let left_len = left_end as usize - lo;
        let right_len = hi - right_start;
        if left_len < right_len {
          stack.push((right_start, hi));
          todo = Some((lo, left_end as usize));
        } else {
          stack.push((lo, left_end as usize));
          todo = Some((right_start, hi));
        }
      }
      (true, false) => todo = Some((lo, left_end as usize)),
      (false, true) => todo = Some((right_start, hi)),
      (false, false) => {}
    }
  }
}

/// Partition `li[lo..=hi]` around a copy of the middle key.
/// Returns (end of left side, may be `lo - 1`; start of right side).
/// 围绕中间键的副本划分 `li[lo..=hi]`。
/// 返回（左侧结束位置，可能为 `lo - 1`；右侧起始位置）。
fn partition<T: Timed>(li: &mut [T], lo: usize, hi: usize) -> (isize, usize) {
  let pivot = li[lo + (hi - lo) / 2].ts().to_owned();
  let mut i = lo as isize;
  let mut j = hi as isize;

  while i <= j {
    while cmp(li[i as usize].ts(), &pivot).is_lt() {
      i += 1;
    }
    while cmp(li[j as usize].ts(), &pivot).is_gt() {
      j -= 1;
    }
    if i <= j {
      li.swap(i as usize, j as usize);
      i += 1;
      j -= 1;
    }
  }

  (j, i as usize)
}

/// Whether `li` is non-decreasing by timestamp
/// `li` 是否按时间戳非递减
#[inline]
#[must_use]
pub fn is_sorted<T: Timed>(li: &[T]) -> bool {
  first_unsorted(li).is_none()
}

/// Index of the first record smaller than its predecessor
/// 第一个小于前驱的记录位置
#[inline]
pub(crate) fn first_unsorted<T: Timed>(li: &[T]) -> Option<usize> {
  li.windows(2)
    .position(|w| cmp_ts(&w[0], &w[1]).is_gt())
    .map(|p| p + 1)
}
