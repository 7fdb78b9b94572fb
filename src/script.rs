//! 栈操作脚本
//!
//! 每行一个操作：`push <value>`、`pop`、`top`、`len`、`clear`、`empty`。
//! 空行和以 `#` 开头的行会被跳过。

use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::Colorize;
use log::debug;

use crate::error::ScriptError;
use crate::input::Opts;
use crate::stack::Stack;

/// 单条栈操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(String),
    Pop,
    Top,
    Len,
    Clear,
    Empty,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `push` keeps everything after the first whitespace character verbatim.
        let (keyword, rest) = match s.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (s, None),
        };

        match keyword.to_lowercase().as_str() {
            "push" => Ok(Command::Push(rest.unwrap_or_default().to_string())),
            _ if rest.is_some_and(|rest| !rest.trim().is_empty()) => Err(s.to_string()),
            "pop" => Ok(Command::Pop),
            "top" => Ok(Command::Top),
            "len" | "length" => Ok(Command::Len),
            "clear" => Ok(Command::Clear),
            "empty" => Ok(Command::Empty),
            _ => Err(s.to_string()),
        }
    }
}

/// 脚本执行配置
#[derive(Debug, Clone, Default)]
pub struct ScriptConfig {
    /// 不输出每条操作的结果
    pub silent: bool,
    /// 空栈错误后继续执行
    pub keep_going: bool,
}

impl From<&Opts> for ScriptConfig {
    fn from(opts: &Opts) -> Self {
        ScriptConfig {
            silent: opts.silent,
            keep_going: opts.keep_going,
        }
    }
}

/// 脚本执行结果汇总
#[derive(Debug)]
pub struct Summary {
    pub length: usize,
    /// `keep_going` 模式下被跳过的空栈错误
    pub failures: Vec<ScriptError>,
}

impl Summary {
    /// 每个被跳过的失败输出一行 `warning:`，runner 本身只在 debug 级别记录
    pub fn report_failures<W: Write>(&self, mut err: W) -> std::io::Result<()> {
        for failure in &self.failures {
            writeln!(err, "{} {}", "warning:".yellow().bold(), failure)?;
        }
        Ok(())
    }
}

/// 在一个 `Stack<String>` 上逐行执行脚本，结果写入 `out`
pub struct ScriptRunner<W: Write> {
    stack: Stack<String>,
    out: W,
    config: ScriptConfig,
    line: usize,
    failures: Vec<ScriptError>,
}

impl<W: Write> ScriptRunner<W> {
    pub fn new(out: W, config: ScriptConfig) -> Self {
        ScriptRunner {
            stack: Stack::new(),
            out,
            config,
            line: 0,
            failures: Vec::new(),
        }
    }

    pub fn stack(&self) -> &Stack<String> {
        &self.stack
    }

    /// 执行下一行脚本
    pub fn run_line(&mut self, text: &str) -> Result<(), ScriptError> {
        self.line += 1;
        let text = text.trim_end_matches(['\r', '\n']);
        if text.trim().is_empty() || text.trim_start().starts_with('#') {
            return Ok(());
        }

        let command = text
            .trim_start()
            .parse::<Command>()
            .map_err(|text| ScriptError::UnknownCommand {
                line: self.line,
                text,
            })?;
        debug!("line {}: {:?}", self.line, command);

        match self.execute(command) {
            Err(ScriptError::Empty { line, source }) if self.config.keep_going => {
                debug!("line {}: {}, continuing", line, source);
                self.failures.push(ScriptError::Empty { line, source });
                Ok(())
            }
            result => result,
        }
    }

    pub fn run_lines<I, S>(&mut self, lines: I) -> Result<(), ScriptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.run_line(line.as_ref())?;
        }
        Ok(())
    }

    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> Result<(), ScriptError> {
        for line in reader.lines() {
            self.run_line(&line?)?;
        }
        Ok(())
    }

    /// 输出最终长度并返回汇总
    pub fn finish(mut self) -> Result<Summary, ScriptError> {
        let length = self.stack.length();
        writeln!(self.out, "length: {}", length)?;
        self.out.flush()?;
        Ok(Summary {
            length,
            failures: self.failures,
        })
    }

    fn execute(&mut self, command: Command) -> Result<(), ScriptError> {
        let line = self.line;
        let output = match command {
            Command::Push(value) => {
                self.stack.push(value);
                None
            }
            Command::Pop => Some(
                self.stack
                    .pop()
                    .map_err(|source| ScriptError::Empty { line, source })?,
            ),
            Command::Top => Some(
                self.stack
                    .top()
                    .map_err(|source| ScriptError::Empty { line, source })?
                    .clone(),
            ),
            Command::Len => Some(self.stack.length().to_string()),
            Command::Clear => {
                self.stack.clear();
                None
            }
            Command::Empty => Some(self.stack.is_empty().to_string()),
        };

        if let Some(output) = output {
            if !self.config.silent {
                writeln!(self.out, "{}", output)?;
            }
        }
        Ok(())
    }
}
