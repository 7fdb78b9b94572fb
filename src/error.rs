use thiserror::Error;

/// 对空栈执行 pop/top 时返回的错误，变体标明触发错误的操作
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyContainerError {
    #[error("pop from empty stack")]
    Pop,
    #[error("empty stack")]
    Top,
}

/// 脚本执行错误
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{text}`")]
    UnknownCommand { line: usize, text: String },
    #[error("line {line}: {source}")]
    Empty {
        line: usize,
        #[source]
        source: EmptyContainerError,
    },
    #[error("script i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
