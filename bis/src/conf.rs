//! Search configuration
//! 查找配置

/// Search configuration options
/// 查找配置选项
#[derive(Debug, Clone, Copy)]
pub enum Conf {
  /// An iteration stalls when the window keeps at least this share of its previous size
  /// 窗口保留不少于上轮该比例时视为停滞
  StallRatio(f64),

  /// Consecutive stalls before falling back to binary search
  /// 连续停滞多少次后回退到二分查找
  StallLimit(u32),

  /// Iterations allowed beyond floor(log2(n))
  /// 在 floor(log2(n)) 之外额外允许的迭代次数
  ExtraIter(usize),

  /// Windows smaller than this go straight to binary search
  /// 小于此大小的窗口直接使用二分查找
  MinWindow(usize),
}

/// Internal configuration struct
/// 内部配置结构体
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
  pub stall_ratio: f64,
  pub stall_limit: u32,
  pub extra_iter: usize,
  pub min_window: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      stall_ratio: default::STALL_RATIO,
      stall_limit: default::STALL_LIMIT,
      extra_iter: default::EXTRA_ITER,
      min_window: default::MIN_WINDOW,
    }
  }
}

impl From<&[Conf]> for Config {
  fn from(conf_li: &[Conf]) -> Self {
    let mut config = Self::default();
    for &conf in conf_li {
      match conf {
        Conf::StallRatio(v) => {
          if v.is_finite() && v > 0.0 {
            config.stall_ratio = v;
          } else {
            log::warn!("StallRatio {v} ignored, must be finite and > 0");
          }
        }
        Conf::StallLimit(v) => config.stall_limit = v.max(1),
        Conf::ExtraIter(v) => config.extra_iter = v,
        Conf::MinWindow(v) => config.min_window = v,
      }
    }
    config
  }
}

/// Default values
/// 默认值
pub mod default {
  pub const STALL_RATIO: f64 = 0.8;
  pub const STALL_LIMIT: u32 = 2;
  pub const EXTRA_ITER: usize = 3;
  pub const MIN_WINDOW: usize = 3;
}
