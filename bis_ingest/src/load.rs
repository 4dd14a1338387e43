use std::path::Path;

use crate::{Conf, Error, Parsed, Result, Value, parse};

/// Read a whole file and scrape its records
/// 读取整个文件并提取其中的记录
///
/// # Errors
/// `Error::Io` when the file cannot be read, `Error::Full` past the capacity
pub fn load<V: Value>(path: impl AsRef<Path>, conf: &[Conf]) -> Result<Parsed<V>> {
  let path = path.as_ref();
  let text = std::fs::read(path).map_err(|source| Error::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let parsed = parse(&text, conf)?;
  log::debug!(
    "{}: {} records, {} skipped",
    path.display(),
    parsed.li.len(),
    parsed.skip
  );
  Ok(parsed)
}
