//! # 美化输出工具
//!
//! 统一的终端输出样式，以及每个文件一行的转换结果。
//!
//! 批处理过程中的行（目标数量、无目标提示、逐文件结果）写入调用方给出的
//! `Write`，成功行与失败行走同一个输出流，顺序与转换顺序一致：
//! - `[OK] Conversion successful for <path>`
//! - `[ERR] Error converting <path>: <detail>`
//!
//! 写入失败时静默丢弃，与 `println!` 的尽力输出一致，不影响批处理。
//!
//! ## 依赖关系
//! - 被 `main.rs` 和 `commands/` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;

/// 打印错误消息（stderr，仅用于致命错误）
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    write_info(&mut std::io::stdout(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 写入信息消息
pub fn write_info(out: &mut impl Write, msg: &str) {
    writeln!(out, "{} {}", "[*]".blue().bold(), msg).ok();
}

/// 写入警告消息
pub fn write_warning(out: &mut impl Write, msg: &str) {
    writeln!(out, "{} {}", "[WARN]".yellow().bold(), msg).ok();
}

/// 单个文件转换成功
pub fn write_converted(out: &mut impl Write, path: &Path) {
    writeln!(out, "{} {}", "[OK]".green().bold(), converted_line(path)).ok();
}

/// 单个文件转换失败
pub fn write_conversion_error(out: &mut impl Write, path: &Path, detail: &dyn Display) {
    writeln!(
        out,
        "{} {}",
        "[ERR]".red().bold(),
        conversion_error_line(path, detail)
    )
    .ok();
}

fn converted_line(path: &Path) -> String {
    format!("Conversion successful for {}", path.display())
}

fn conversion_error_line(path: &Path, detail: &dyn Display) -> String {
    format!("Error converting {}: {}", path.display(), detail)
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}
