//! # 批量处理模块
//!
//! 列出目标文件并逐个交给外部转换器。
//!
//! ## 功能
//! - 按后缀收集工作目录下的文件
//! - 顺序调用转换器
//! - 结果统计
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 使用 `walkdir` 枚举目录
//! - 使用 `std::process` 启动转换器

pub mod collector;
pub mod runner;

pub use collector::list_targets;
pub use runner::{BatchResult, BatchRunner, ConversionTask};
