//! Error definitions for bis
//! bis 错误定义

use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum Error {
  /// Key at `at` is smaller than the key before it
  /// `at` 处的键小于前一个键
  #[error("Data must be sorted, first violation at {at} / 数据必须已排序，首个违例位置 {at}")]
  NotSorted { at: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
