use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// 安装终端日志器，日志写到 stderr，不与脚本输出混在一起
///
/// 全局日志器只能设置一次，重复调用会返回 `SetLoggerError`。
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
