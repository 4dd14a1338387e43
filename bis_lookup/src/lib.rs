//! Temperature / humidity lookup by timestamp
//! 按时间戳查询温度与湿度
//!
//! ```text
//!  tempm.txt      hum.txt
//!      │             │
//!      ▼             ▼
//!   bis_ingest   bis_ingest     scrape records / 提取记录
//!      │             │
//!      ▼             ▼
//!   Series<Temp> Series<Hum>    sorted once / 排序一次
//!       \           /
//!        ▼         ▼
//!         Dataset              lookup façade / 查询门面
//! ```

mod args;
mod dataset;
mod error;
mod mode;
mod reading;
mod run;

pub use args::Args;
pub use dataset::{Dataset, Hum, Temp};
pub use error::{Error, Result};
pub use mode::Mode;
pub use reading::Reading;
pub use run::run;
