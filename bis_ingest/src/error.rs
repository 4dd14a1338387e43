use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("read {}: {source} / 读取失败", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("more than {cap} records / 记录数超过 {cap}")]
  Full { cap: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
