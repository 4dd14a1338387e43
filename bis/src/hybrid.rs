//! Adaptive hybrid search: interpolation + sqrt-block narrowing + binary fallback
//! 自适应混合查找：插值 + 平方根分块收缩 + 二分回退
//!
//! Each round estimates a position from the date prefix, then walks away from
//! it in blocks of `floor(sqrt(size))` until a block brackets the target.
//! Progress is watched: when the window stops shrinking, the iteration budget
//! runs out, or the window gets tiny, the rest of the work is handed to plain
//! binary search on the current window, which bounds the worst case by
//! O(log n).
//! 每轮先根据日期前缀估计位置，再以 `floor(sqrt(size))` 为步长分块移动，
//! 直到某块包住目标。若窗口不再收缩、迭代预算用尽或窗口过小，
//! 剩余工作交给当前窗口上的二分查找，最坏情况因此为 O(log n)。

#![allow(clippy::cast_precision_loss)]

use std::cmp::Ordering;

use crate::{Config, Timed, binary, cmp, estimate};

/// Why the heuristic was abandoned
/// 放弃启发式的原因
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
  /// More iterations than floor(log2(n)) + extra
  /// 迭代次数超过 floor(log2(n)) + extra
  Budget,
  /// Window smaller than `min_window`
  /// 窗口小于 `min_window`
  Narrow,
  /// Window failed to shrink `stall_limit` times in a row
  /// 窗口连续 `stall_limit` 次未能收缩
  Stall,
}

/// Outcome of one search with the path it took
/// 单次查找的结果及其路径
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trace {
  pub pos: Option<usize>,
  pub iterations: usize,
  pub fallback: Option<Fallback>,
}

impl Trace {
  #[inline]
  fn hit(pos: usize, iterations: usize) -> Self {
    Self {
      pos: Some(pos),
      iterations,
      fallback: None,
    }
  }

  #[inline]
  fn miss(iterations: usize) -> Self {
    Self {
      pos: None,
      iterations,
      fallback: None,
    }
  }
}

/// Find `target` in sorted `li` with the default configuration
/// 使用默认配置在已排序的 `li` 中查找 `target`
#[inline]
#[must_use]
pub fn find<T: Timed>(li: &[T], target: &str) -> Option<usize> {
  trace(li, target, &Config::default()).pos
}

/// Run the adaptive search and report how it finished
/// 执行自适应查找并报告其结束方式
///
/// `li` must be sorted by timestamp, otherwise the result is meaningless
/// (but still never out of bounds).
/// `li` 必须按时间戳排序，否则结果无意义（但仍不会越界）。
#[must_use]
pub fn trace<T: Timed>(li: &[T], target: &str, config: &Config) -> Trace {
  let n = li.len();
  if n == 0 {
    return Trace::miss(0);
  }

  let mut left = 0;
  let mut right = n - 1;
  let mut next = estimate(li, left, right, target);
  let max_iter = n.ilog2() as usize + config.extra_iter;
  let mut iterations = 0;
  let mut last_size = n;
  let mut stall = 0u32;

  loop {
    let dir = cmp(target, li[next].ts());
    if dir == Ordering::Equal {
      return Trace::hit(next, iterations);
    }

    iterations += 1;
    let size = right - left + 1;

    if size as f64 >= config.stall_ratio * last_size as f64 {
      stall += 1;
    } else {
      stall = 0;
    }
    last_size = size;

    let fallback = if iterations > max_iter {
      Some(Fallback::Budget)
    } else if size < config.min_window {
      Some(Fallback::Narrow)
    } else if stall >= config.stall_limit {
      Some(Fallback::Stall)
    } else {
      None
    };

    if let Some(reason) = fallback {
      log::trace!("{target}: fallback {reason:?} at [{left}, {right}] after {iterations} iterations");
      return Trace {
        pos: binary(li, left, right, target),
        iterations,
        fallback: Some(reason),
      };
    }

    let w = size.isqrt().max(1);

    if dir == Ordering::Greater {
      // Walk right until a block ends at or past the target
      // 向右移动，直到某块末尾不小于目标
      let mut i = 1;
      while next + i * w <= right + 1 && cmp(target, li[next + i * w - 1].ts()).is_gt() {
        i += 1;
      }
      left = next + (i - 1) * w;
      right = (next + i * w).min(right);
    } else {
      // Walk left until a block starts at or before the target
      // 向左移动，直到某块开头不大于目标
      let mut i = 1;
      while next + 1 >= left + i * w && cmp(target, li[next + 1 - i * w].ts()).is_lt() {
        i += 1;
      }
      // Right bound would go negative: everything left of it is already too large
      // 右边界将为负：其左侧全部过大
      let Some(hi) = (next + w).checked_sub(i * w) else {
        return Trace::miss(iterations);
      };
      left = next.checked_sub(i * w).map_or(left, |lo| lo.max(left));
      right = hi;
    }

    if left > right {
      return Trace::miss(iterations);
    }

    next = estimate(li, left, right, target);
  }
}
