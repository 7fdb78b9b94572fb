//! 日志初始化
//!
//! 栈本身只通过 `log` 门面输出 trace 级别的记录，具体输出由这里安装的
//! simplelog 终端日志器负责。

mod rlogger;

pub use rlogger::init_logger;
