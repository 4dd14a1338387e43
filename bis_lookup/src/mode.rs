use std::str::FromStr;

use crate::Error;

/// Which series to report
/// 要报告的序列
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
  Temperature = 1,
  Humidity = 2,
  Both = 3,
}

impl Mode {
  #[inline]
  #[must_use]
  pub fn temperature(self) -> bool {
    matches!(self, Self::Temperature | Self::Both)
  }

  #[inline]
  #[must_use]
  pub fn humidity(self) -> bool {
    matches!(self, Self::Humidity | Self::Both)
  }
}

impl TryFrom<u8> for Mode {
  type Error = Error;

  fn try_from(v: u8) -> Result<Self, Self::Error> {
    match v {
      1 => Ok(Self::Temperature),
      2 => Ok(Self::Humidity),
      3 => Ok(Self::Both),
      _ => Err(Error::InvalidMode(v.to_string())),
    }
  }
}

impl FromStr for Mode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    s.parse::<u8>()
      .map_err(|_| Error::InvalidMode(s.to_owned()))
      .and_then(Self::try_from)
  }
}
