//! Extract `(timestamp, value)` records from raw text
//! 从原始文本中提取 `(时间戳, 数值)` 记录
//!
//! The input is usually a JSON-ish dump such as
//! `{"2014-05-15T00:20": "12.0", ...}` but nothing beyond the quoting rules
//! is assumed. Records come out in input order and unsorted.
//! 输入通常是 `{"2014-05-15T00:20": "12.0", ...}` 这类类 JSON 文本，
//! 但除引号规则外不做其他假设。记录按输入顺序输出，未排序。

mod conf;
mod error;
mod load;
mod scan;
mod value;

pub use conf::{Conf, Config, default};
pub use error::{Error, Result};
pub use load::load;
pub use scan::{Parsed, parse};
pub use value::Value;
