//! # lifo_stack
//!
//! 基于双向链表节点实现的泛型后进先出（LIFO）栈。
//!
//! ## 特性
//!
//! - **O(1)** push / pop / top / length
//! - 空栈上的 `pop` / `top` 返回 [`EmptyContainerError`]，不会返回哨兵值
//! - 节点链按迭代方式释放，百万级元素的栈也能安全析构
//! - 附带 `lifo` 命令行工具，可按脚本驱动一个字符串栈
//!
//! ## 快速开始
//!
//! ```rust
//! use lifo_stack::{EmptyContainerError, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! stack.push(3);
//! assert_eq!(stack.length(), 3);
//!
//! assert_eq!(stack.pop(), Ok(3));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.top(), Ok(&1));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(EmptyContainerError::Pop));
//! ```
//!
//! ## 脚本
//!
//! ```rust
//! use lifo_stack::{ScriptConfig, ScriptRunner};
//!
//! let mut out = Vec::new();
//! let mut runner = ScriptRunner::new(&mut out, ScriptConfig::default());
//! runner.run_lines(["push a", "push b", "pop", "len"]).unwrap();
//! let summary = runner.finish().unwrap();
//!
//! assert_eq!(summary.length, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "b\n1\nlength: 1\n");
//! ```

pub mod error;
pub mod input;
pub mod logger;
pub mod script;
pub mod stack;

pub use error::{EmptyContainerError, ScriptError};
pub use script::{Command, ScriptConfig, ScriptRunner, Summary};
pub use stack::Stack;
