use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use clap::Parser;
use colored::Colorize;
use lifo_stack::input::{Opts, ScriptSource};
use lifo_stack::logger::init_logger;
use lifo_stack::{ScriptConfig, ScriptError, ScriptRunner};

fn main() {
    let opts = Opts::parse();

    if let Err(e) = init_logger(opts.log_level) {
        eprintln!("日志初始化失败: {}", e);
    }

    match run_script(&opts) {
        Ok(0) => {}
        Ok(failures) => {
            eprintln!("{} 次空栈操作被跳过", failures);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    }
}

/// 执行脚本，返回 `--keep-going` 模式下跳过的失败次数
fn run_script(opts: &Opts) -> Result<usize, ScriptError> {
    let stdout = io::stdout();
    let mut runner = ScriptRunner::new(stdout.lock(), ScriptConfig::from(opts));

    match opts.source() {
        ScriptSource::Inline(commands) => runner.run_lines(&commands)?,
        ScriptSource::File(path) => runner.run_reader(BufReader::new(File::open(path)?))?,
        ScriptSource::Stdin => runner.run_reader(io::stdin().lock())?,
    }

    let summary = runner.finish()?;
    summary.report_failures(io::stderr().lock())?;
    Ok(summary.failures.len())
}
