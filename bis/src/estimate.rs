//! Position estimation by interpolating on the date prefix
//! 基于日期前缀插值的位置估计

#![allow(
  clippy::cast_possible_truncation,
  clippy::cast_precision_loss,
  clippy::cast_sign_loss
)]

use crate::{Timed, cmp};

/// Length of the `YYYY-MM-DD` prefix
/// `YYYY-MM-DD` 前缀长度
pub const DATE_LEN: usize = 10;

/// Ratio used when interpolation is degenerate
/// 插值退化时使用的比例
const MID: f64 = 0.5;

/// Estimate where `target` lies in `li[left..=right]`.
/// Always returns a position inside the window.
/// 估计 `target` 在 `li[left..=right]` 中的位置，结果总在窗口内。
///
/// Caller guarantees `left <= right < li.len()`.
/// 调用方保证 `left <= right < li.len()`。
#[must_use]
pub fn estimate<T: Timed>(li: &[T], left: usize, right: usize, target: &str) -> usize {
  debug_assert!(left <= right && right < li.len());

  let lo = li[left].ts();
  let hi = li[right].ts();

  if cmp(target, lo).is_le() {
    return left;
  }
  if cmp(target, hi).is_ge() {
    return right;
  }

  let ratio = ratio(target, lo, hi).unwrap_or(MID);
  let pos = left + (ratio * (right - left) as f64) as usize;
  pos.clamp(left, right)
}

/// Interpolation ratio in [0, 1], None when the prefixes are degenerate
/// [0, 1] 内的插值比例，前缀退化时返回 None
fn ratio(target: &str, lo: &str, hi: &str) -> Option<f64> {
  let t = prefix(target)?;
  let l = prefix(lo)?;
  let r = prefix(hi)?;

  if cmp(t, l).is_le() || cmp(r, l).is_le() {
    return None;
  }

  let (t, l, r) = (leading_int(t), leading_int(l), leading_int(r));
  if r == l {
    return None;
  }
  Some(((t - l) as f64 / (r - l) as f64).clamp(0.0, 1.0))
}

#[inline]
fn prefix(ts: &str) -> Option<&str> {
  ts.get(..DATE_LEN)
}

/// Leading decimal integer, 0 when there is none ("2014-01-03" → 2014)
/// 开头的十进制整数，没有时为 0（"2014-01-03" → 2014）
fn leading_int(s: &str) -> i64 {
  let s = s.trim_start();
  let (neg, digits) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1..]),
    Some(b'+') => (false, &s[1..]),
    _ => (false, s),
  };
  let n = digits
    .bytes()
    .take_while(u8::is_ascii_digit)
    .fold(0i64, |acc, b| {
      acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
  if neg { -n } else { n }
}
