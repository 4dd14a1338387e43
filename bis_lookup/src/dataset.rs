//! Two independently sorted series and the lookup façade over them
//! 两条独立排序的序列及其查询门面

use std::path::Path;

use bis::{Series, TimedValue};

use crate::{Mode, Reading, Result};

/// Temperature reading, degrees
/// 温度读数
pub type Temp = TimedValue<f64>;

/// Humidity reading, percent
/// 湿度读数
pub type Hum = TimedValue<i64>;

/// Owns both series; they share timestamps only by convention
/// 持有两条序列；二者的时间戳仅按约定一致
#[derive(Clone, Debug)]
pub struct Dataset {
  temp: Series<Temp>,
  hum: Series<Hum>,
}

impl Dataset {
  /// Sort both series and take ownership
  /// 排序两条序列并接管所有权
  #[must_use]
  pub fn new(temp: Vec<Temp>, hum: Vec<Hum>, conf: &[bis::Conf]) -> Self {
    Self {
      temp: Series::sort(temp, conf),
      hum: Series::sort(hum, conf),
    }
  }

  /// Ingest both files, then sort
  /// 导入两个文件后排序
  ///
  /// # Errors
  /// Any ingestion failure of either file
  pub fn load(
    temp: impl AsRef<Path>,
    hum: impl AsRef<Path>,
    ingest: &[bis_ingest::Conf],
    search: &[bis::Conf],
  ) -> Result<Self> {
    let temp = bis_ingest::load::<f64>(temp, ingest)?;
    let hum = bis_ingest::load::<i64>(hum, ingest)?;
    if temp.li.len() != hum.li.len() {
      log::warn!(
        "series length differ: {} temperature, {} humidity",
        temp.li.len(),
        hum.li.len()
      );
    }
    Ok(Self::new(temp.li, hum.li, search))
  }

  #[inline]
  #[must_use]
  pub fn temp(&self) -> &Series<Temp> {
    &self.temp
  }

  #[inline]
  #[must_use]
  pub fn hum(&self) -> &Series<Hum> {
    &self.hum
  }

  #[inline]
  #[must_use]
  pub fn temperature(&self, ts: &str) -> Option<&Temp> {
    self.temp.get(ts)
  }

  #[inline]
  #[must_use]
  pub fn humidity(&self, ts: &str) -> Option<&Hum> {
    self.hum.get(ts)
  }

  /// Present in both series
  /// 两条序列中都存在
  #[must_use]
  pub fn contains(&self, ts: &str) -> bool {
    self.temp.find(ts).is_some() && self.hum.find(ts).is_some()
  }

  /// Compose the lookups `mode` asks for
  /// 组合 `mode` 所请求的查询
  #[must_use]
  pub fn lookup(&self, ts: &str, mode: Mode) -> Reading {
    Reading {
      temp: mode
        .temperature()
        .then(|| self.temperature(ts).map(|r| r.val))
        .flatten(),
      hum: mode
        .humidity()
        .then(|| self.humidity(ts).map(|r| r.val))
        .flatten(),
    }
  }
}
