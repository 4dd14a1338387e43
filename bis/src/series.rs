//! Sorted series with data ownership
//! 持有数据的有序序列

use std::ops::Deref;

use crate::{Conf, Config, Error, Result, Timed, Trace, sort::first_unsorted};

/// Records sorted once by timestamp, read-only afterwards
/// 按时间戳排序一次、之后只读的记录序列
#[derive(Clone, Debug)]
pub struct Series<T: Timed> {
  li: Vec<T>,
  config: Config,
}

impl<T: Timed> Deref for Series<T> {
  type Target = [T];

  #[inline]
  fn deref(&self) -> &Self::Target {
    &self.li
  }
}

impl<T: Timed> Series<T> {
  /// Sort `li` in place and take ownership
  /// 原地排序 `li` 并接管所有权
  #[must_use]
  pub fn sort(mut li: Vec<T>, conf: &[Conf]) -> Self {
    crate::sort(&mut li);
    Self {
      li,
      config: conf.into(),
    }
  }

  /// Take already sorted records, checking the order
  /// 接管已排序的记录并检查顺序
  ///
  /// # Errors
  /// Returns `Error::NotSorted` at the first out-of-order record
  pub fn from_sorted(li: Vec<T>, conf: &[Conf]) -> Result<Self> {
    if let Some(at) = first_unsorted(&li) {
      return Err(Error::NotSorted { at });
    }
    Ok(Self {
      li,
      config: conf.into(),
    })
  }

  #[inline]
  #[must_use]
  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Position of `ts` (None if absent)
  /// `ts` 的位置（不存在则返回 None）
  #[inline]
  #[must_use]
  pub fn find(&self, ts: &str) -> Option<usize> {
    self.trace(ts).pos
  }

  /// Record at `ts` (None if absent)
  /// `ts` 处的记录（不存在则返回 None）
  #[inline]
  #[must_use]
  pub fn get(&self, ts: &str) -> Option<&T> {
    self.find(ts).map(|pos| &self.li[pos])
  }

  #[inline]
  #[must_use]
  pub fn trace(&self, ts: &str) -> Trace {
    crate::trace(&self.li, ts, &self.config)
  }

  #[inline]
  #[must_use]
  pub fn into_inner(self) -> Vec<T> {
    self.li
  }
}
