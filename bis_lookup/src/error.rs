use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Ingest(#[from] bis_ingest::Error),

  #[error("invalid mode {0:?}, expect 1, 2 or 3 / 无效模式")]
  InvalidMode(String),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  /// Process exit status: only ingestion failures are fatal
  /// 进程退出码：仅导入失败为致命错误
  #[must_use]
  pub fn exit_code(&self) -> u8 {
    match self {
      Self::Ingest(_) => 1,
      Self::InvalidMode(_) | Self::Io(_) => 0,
    }
  }
}

pub type Result<T> = std::result::Result<T, Error>;
