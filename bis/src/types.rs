//! Type definitions for bis
//! bis 类型定义

use std::fmt::Debug;

/// Record keyed by a fixed-format timestamp
/// 以固定格式时间戳为键的记录
///
/// The first 10 bytes of the key are expected to be `YYYY-MM-DD`.
/// 键的前 10 个字节应为 `YYYY-MM-DD`。
pub trait Timed: Debug {
  fn ts(&self) -> &str;
}

impl Timed for String {
  #[inline(always)]
  fn ts(&self) -> &str {
    self
  }
}

impl Timed for &str {
  #[inline(always)]
  fn ts(&self) -> &str {
    self
  }
}

/// Timestamp / value pair
/// 时间戳 / 数值对
#[derive(Clone, Debug, PartialEq)]
pub struct TimedValue<V> {
  pub ts: String,
  pub val: V,
}

impl<V> TimedValue<V> {
  #[inline]
  pub fn new(ts: impl Into<String>, val: V) -> Self {
    Self { ts: ts.into(), val }
  }
}

impl<V: Debug> Timed for TimedValue<V> {
  #[inline(always)]
  fn ts(&self) -> &str {
    &self.ts
  }
}
