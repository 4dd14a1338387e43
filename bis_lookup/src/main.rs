use std::process::ExitCode;

use bis_lookup::{Args, run};
use clap::Parser;

fn main() -> ExitCode {
  log_init::init();
  let args = Args::parse();

  let stdin = std::io::stdin();
  let stdout = std::io::stdout();
  match run(&args, &mut stdin.lock(), &mut stdout.lock()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      log::error!("{e}");
      eprintln!("{e}");
      ExitCode::from(e.exit_code())
    }
  }
}
