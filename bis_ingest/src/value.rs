//! Numeric prefix parsing
//! 数值前缀解析

/// Measurement type that can be read from the front of a byte slice
/// 可从字节切片开头读取的测量值类型
pub trait Value: Sized + std::fmt::Debug {
  /// Parse the longest numeric prefix, returning the value and bytes consumed
  /// 解析最长的数值前缀，返回数值及消耗的字节数
  fn parse_prefix(b: &[u8]) -> Option<(Self, usize)>;
}

impl Value for f64 {
  fn parse_prefix(b: &[u8]) -> Option<(Self, usize)> {
    let mut i = sign(b);
    let int = digits(&b[i..]);
    i += int;
    let mut frac = 0;
    if b.get(i) == Some(&b'.') {
      frac = digits(&b[i + 1..]);
      i += 1 + frac;
    }
    if int + frac == 0 {
      return None;
    }
    if matches!(b.get(i), Some(b'e' | b'E')) {
      let s = sign(&b[i + 1..]);
      let exp = digits(&b[i + 1 + s..]);
      if exp > 0 {
        i += 1 + s + exp;
      }
    }
    let v = std::str::from_utf8(&b[..i]).ok()?.parse().ok()?;
    Some((v, i))
  }
}

impl Value for i64 {
  fn parse_prefix(b: &[u8]) -> Option<(Self, usize)> {
    let s = sign(b);
    let n = digits(&b[s..]);
    if n == 0 {
      return None;
    }
    let i = s + n;
    let v = std::str::from_utf8(&b[..i]).ok()?.parse().ok()?;
    Some((v, i))
  }
}

#[inline]
fn sign(b: &[u8]) -> usize {
  usize::from(matches!(b.first(), Some(b'+' | b'-')))
}

#[inline]
fn digits(b: &[u8]) -> usize {
  b.iter().take_while(|c| c.is_ascii_digit()).count()
}
