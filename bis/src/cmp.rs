//! Timestamp ordering
//! 时间戳排序规则

use std::cmp::Ordering;

use crate::Timed;

/// Byte-wise lexicographic order, chronological for the fixed timestamp format
/// 按字节的字典序，对固定时间戳格式即为时间顺序
#[inline(always)]
#[must_use]
pub fn cmp(a: &str, b: &str) -> Ordering {
  a.as_bytes().cmp(b.as_bytes())
}

#[inline(always)]
#[must_use]
pub fn cmp_ts<T: Timed + ?Sized>(a: &T, b: &T) -> Ordering {
  cmp(a.ts(), b.ts())
}
