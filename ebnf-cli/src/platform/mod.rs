//! 平台适配层（终端输出格式化）

pub mod cli;

pub use cli::{render_outcome, render_report, render_rules};
