//! # bms2midi - BMS 谱面批量转 MIDI
//!
//! 扫描目录下的 .bms 文件，逐个调用外部转换器 `bmsanalyzer.exe`，
//! 并报告每个文件的转换结果。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── config.rs  (批处理配置)
//!   │     └── batch/     (文件收集与顺序执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod utils;

#[cfg(test)]
mod testing;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    // 单个文件失败不影响退出码，只有目录无法枚举才以 1 退出
    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
