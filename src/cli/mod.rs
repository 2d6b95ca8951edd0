//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::Parser;

/// bms2midi - 批量将 BMS 谱面转换为 MIDI
#[derive(Parser, Debug)]
#[command(name = "bms2midi")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch-convert every .bms chart in a folder to MIDI", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: convert::ConvertArgs,
}
