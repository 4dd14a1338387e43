//! Record scanner
//! 记录扫描器

use bis::TimedValue;
use memchr::memchr2;

use crate::{Conf, Config, Error, Result, Value};

/// Scraped records plus the count of malformed ones
/// 提取出的记录及格式错误记录的数量
#[derive(Clone, Debug, PartialEq)]
pub struct Parsed<V> {
  /// Records in input order
  /// 按输入顺序排列的记录
  pub li: Vec<TimedValue<V>>,
  /// Timestamp-looking tokens that did not make a record
  /// 形似时间戳但未能构成记录的片段数
  pub skip: usize,
}

/// Scrape every `"YYYY-...": value` record out of `text`
/// 从 `text` 中提取所有 `"YYYY-...": value` 记录
///
/// # Errors
/// Returns `Error::Full` once more than `Conf::Cap` records are found
pub fn parse<V: Value>(text: &[u8], conf: &[Conf]) -> Result<Parsed<V>> {
  let config = Config::from(conf);
  let mut li = Vec::new();
  let mut skip = 0;
  let mut pos = 0;

  while let Some(off) = memchr2(b'"', b'\'', &text[pos..]) {
    let start = pos + off + 1;
    pos = start;
    if !is_ts_head(&text[start..]) {
      continue;
    }

    match record::<V>(text, start, &config) {
      Some((ts, val, end)) => {
        if li.len() >= config.cap {
          return Err(Error::Full { cap: config.cap });
        }
        li.push(TimedValue { ts, val });
        pos = end;
      }
      None => skip += 1,
    }
  }

  if skip > 0 {
    log::warn!("{skip} malformed records skipped, {} kept", li.len());
  }
  Ok(Parsed { li, skip })
}

/// `DDDD-`
fn is_ts_head(b: &[u8]) -> bool {
  b.len() >= 5 && b[..4].iter().all(u8::is_ascii_digit) && b[4] == b'-'
}

/// Read one record whose timestamp starts at `start`.
/// Returns the timestamp, the value and the offset just past the value.
/// 读取时间戳从 `start` 开始的一条记录，
/// 返回时间戳、数值以及数值之后的偏移。
fn record<V: Value>(text: &[u8], start: usize, config: &Config) -> Option<(String, V, usize)> {
  let len = memchr2(b'"', b'\'', &text[start..])?;
  if len > config.max_ts_len {
    return None;
  }
  let ts = String::from_utf8_lossy(&text[start..start + len]).into_owned();

  let mut i = start + len + 1;
  i += text[i..].iter().take_while(|b| b.is_ascii_whitespace()).count();
  if text.get(i) != Some(&b':') {
    return None;
  }
  i += 1;
  i += text[i..]
    .iter()
    .take_while(|&&b| b <= b' ' || b == b'"' || b == b'\'')
    .count();

  let (val, n) = V::parse_prefix(&text[i..])?;
  Some((ts, val, i + n))
}
