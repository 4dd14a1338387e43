//! # bis: Adaptive Binary Interpolation Search
//! bis：自适应二分插值查找
//!
//! Point lookups over a series sorted by timestamp, with no auxiliary index.
//! 在按时间戳排序的序列上做点查找，不构建任何辅助索引。
//!
//! ## Usage / 使用方法
//!
//! ```rust
//! use bis::{Series, TimedValue};
//!
//! let li = vec![
//!   TimedValue::new("2014-01-03T00:20", 3.0),
//!   TimedValue::new("2014-01-01T00:20", 1.0),
//!   TimedValue::new("2014-01-02T00:20", 2.0),
//! ];
//! // Sort once, read-only afterwards
//! // 只排序一次，之后只读
//! let series = Series::sort(li, &[]);
//! assert_eq!(series.find("2014-01-02T00:20"), Some(1));
//! assert_eq!(series.get("2014-01-03T00:20").map(|r| r.val), Some(3.0));
//! assert_eq!(series.find("2014-01-04T00:20"), None);
//! ```

pub mod binary;
pub mod cmp;
pub mod conf;
pub mod error;
pub mod estimate;
pub mod hybrid;
pub mod linear;
mod series;
pub mod sort;
mod types;

pub use binary::{binary, binary_all};
pub use cmp::{cmp, cmp_ts};
pub use conf::{Conf, Config};
pub use error::{Error, Result};
pub use estimate::estimate;
pub use hybrid::{Fallback, Trace, find, trace};
pub use linear::linear;
pub use series::Series;
pub use sort::{is_sorted, sort};
pub use types::{Timed, TimedValue};
