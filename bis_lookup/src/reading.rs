use std::fmt;

/// Values found for one timestamp, only the requested ones are filled
/// 某一时间戳查到的值，仅填充所请求的部分
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reading {
  pub temp: Option<f64>,
  pub hum: Option<i64>,
}

impl fmt::Display for Reading {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(t) = self.temp {
      writeln!(f, "Temperature: {t:.2}")?;
    }
    if let Some(h) = self.hum {
      writeln!(f, "Humidity: {h}")?;
    }
    Ok(())
  }
}
