use std::path::PathBuf;

use clap::Parser;

/// Look up temperature and humidity readings by timestamp
/// 按时间戳查询温度与湿度读数
#[derive(Parser, Debug, Clone)]
#[command(name = "bis_lookup", version, about)]
pub struct Args {
  /// Temperature records
  #[arg(long, default_value = "tempm.txt")]
  pub temp: PathBuf,

  /// Humidity records
  #[arg(long, default_value = "hum.txt")]
  pub hum: PathBuf,

  /// Maximum records per file
  #[arg(long, default_value_t = bis_ingest::default::CAP)]
  pub cap: usize,

  /// Timestamp to look up, prompted for when omitted
  pub date: Option<String>,

  /// 1 = temperature, 2 = humidity, 3 = both; prompted for when omitted
  #[arg(short, long)]
  pub mode: Option<String>,
}
