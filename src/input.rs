use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "lifo")]
#[command(version)]
#[command(about = "Run push/pop/top/len scripts against a LIFO stack", long_about = None)]
pub struct Opts {
    /// operation to run, e.g. "push 1", "pop", "top", "len" (repeatable)
    #[arg(short, long, conflicts_with = "file")]
    pub command: Vec<String>,

    /// script file, one operation per line (stdin when neither -c nor -f is given)
    #[arg(short, long)]
    pub file: Option<String>,

    /// only print the final length
    #[arg(short, long)]
    pub silent: bool,

    /// keep running after pop/top on an empty stack
    #[arg(short, long)]
    pub keep_going: bool,

    /// log level (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value = "warn")]
    pub log_level: LevelFilter,
}

/// 脚本来源：`-c` 优先，其次 `-f`，都没有时读取 stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Inline(Vec<String>),
    File(String),
    Stdin,
}

impl Opts {
    pub fn source(&self) -> ScriptSource {
        if !self.command.is_empty() {
            ScriptSource::Inline(self.command.clone())
        } else if let Some(path) = &self.file {
            ScriptSource::File(path.clone())
        } else {
            ScriptSource::Stdin
        }
    }
}
