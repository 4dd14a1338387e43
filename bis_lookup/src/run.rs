//! Interactive lookup session
//! 交互式查询会话

use std::{
  collections::VecDeque,
  io::{BufRead, Write},
};

use crate::{Args, Dataset, Mode, Result};

const ASK_DATE: &str = "Which day do you want data from?:";
const ASK_MODE: &str = "\nType 1 for temperature data, 2 for humidity data, or 3 for both:";
const NOT_FOUND: &str = "Incorrect timestamp.";
const INVALID: &str = "Invalid option";

/// Load both files, then answer one lookup, prompting on `out` for whatever
/// `args` leaves out.
/// 加载两个文件后回答一次查询，`args` 中缺少的参数在 `out` 上提示输入。
///
/// Not-found and invalid modes are normal outcomes reported on `out`.
/// 未找到与无效模式均为正常结果，输出到 `out`。
///
/// # Errors
/// Ingestion failure, or I/O failure on `input` / `out`
pub fn run(args: &Args, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
  let dataset = Dataset::load(
    &args.temp,
    &args.hum,
    &[bis_ingest::Conf::Cap(args.cap)],
    &[],
  )?;
  log::debug!(
    "{} temperature, {} humidity records",
    dataset.temp().len(),
    dataset.hum().len()
  );

  let mut tokens = Tokens::new(input);

  let ts = match &args.date {
    Some(ts) => ts.trim().to_owned(),
    None => {
      write!(out, "{ASK_DATE}")?;
      out.flush()?;
      tokens.word()?
    }
  };

  if !dataset.contains(&ts) {
    writeln!(out, "{NOT_FOUND}")?;
    return Ok(());
  }

  let mode = match &args.mode {
    Some(mode) => mode.clone(),
    None => {
      write!(out, "{ASK_MODE}")?;
      out.flush()?;
      let mode = tokens.word()?;
      writeln!(out)?;
      mode
    }
  };

  match mode.parse::<Mode>() {
    Ok(mode) => write!(out, "{}", dataset.lookup(&ts, mode))?,
    Err(e) => {
      log::debug!("{e}");
      writeln!(out, "{INVALID}")?;
    }
  }
  out.flush()?;
  Ok(())
}

/// Whitespace-delimited words of `input`, the rest of a line kept for later reads
/// `input` 中以空白分隔的词，行内剩余部分留待后续读取
struct Tokens<'a, R> {
  input: &'a mut R,
  pending: VecDeque<String>,
}

impl<'a, R: BufRead> Tokens<'a, R> {
  fn new(input: &'a mut R) -> Self {
    Self {
      input,
      pending: VecDeque::new(),
    }
  }

  /// Next word, empty at end of input
  /// 下一个词，输入结束时为空
  fn word(&mut self) -> Result<String> {
    let mut line = String::new();
    loop {
      if let Some(word) = self.pending.pop_front() {
        return Ok(word);
      }
      line.clear();
      if self.input.read_line(&mut line)? == 0 {
        return Ok(String::new());
      }
      self.pending.extend(line.split_whitespace().map(str::to_owned));
    }
  }
}
