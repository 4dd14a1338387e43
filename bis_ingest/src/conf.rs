/// Ingestion configuration
/// 导入配置
#[derive(Clone, Copy, Debug)]
pub enum Conf {
  /// Maximum records per series, more is an error
  /// 每个序列的最大记录数，超出即报错
  Cap(usize),
  /// Longer timestamps are skipped as malformed
  /// 更长的时间戳视为格式错误并跳过
  MaxTsLen(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
  pub cap: usize,
  pub max_ts_len: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      cap: default::CAP,
      max_ts_len: default::MAX_TS_LEN,
    }
  }
}

impl From<&[Conf]> for Config {
  fn from(conf_li: &[Conf]) -> Self {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::Cap(v) => config.cap = v,
        Conf::MaxTsLen(v) => {
          if v < bis::estimate::DATE_LEN {
            log::warn!("MaxTsLen {v} shorter than a date, ignored");
          } else {
            config.max_ts_len = v;
          }
        }
      }
    }
    config
  }
}

/// Default values
/// 默认值
pub mod default {
  pub const CAP: usize = 1_000_000;
  /// `YYYY-MM-DDTHH:MM:SS`
  pub const MAX_TS_LEN: usize = 19;
}
