//! # convert 命令实现
//!
//! 批量调用外部转换器，将目录下的 BMS 谱面转换为 MIDI。
//!
//! ## 功能
//! - 按后缀收集目标文件
//! - 顺序调用转换器，每个文件输出一行结果
//! - 结束时输出一行计数汇总
//!
//! 单个文件失败只打印错误，不影响退出码；
//! 只有目录无法枚举时返回错误。
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `config.rs`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{self, BatchResult, BatchRunner, ConversionTask};
use crate::cli::convert::ConvertArgs;
use crate::config::BatchConfig;
use crate::error::Result;
use crate::utils::{output, progress};

use std::io::{self, Write};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let config = args.to_config()?;

    output::print_header("Converting BMS charts to MIDI");
    output::print_info(&format!(
        "Converter: {}",
        config.converter_path.display()
    ));

    let result = run(&config, !args.no_progress, &mut io::stdout())?;

    if result.total() > 0 {
        output::print_separator();
        output::print_done(&summary_message(&result));
    }

    Ok(())
}

/// 列出目标并逐个转换，结果行写入 `out`
///
/// 没有目标时只写一条提示，不调用转换器。
pub fn run(
    config: &BatchConfig,
    show_progress: bool,
    out: &mut impl Write,
) -> Result<BatchResult> {
    let files = batch::list_targets(config)?;

    if files.is_empty() {
        output::write_warning(out, &no_targets_message(config));
        return Ok(BatchResult::default());
    }

    output::write_info(out, &format!("Found {} file(s) to convert", files.len()));

    let pb = progress::create_progress_bar(files.len() as u64, "Converting", show_progress);

    // 转换器继承终端输出，整个单文件步骤期间挂起进度条
    let result = BatchRunner::new(config).run(files, |convert| {
        let task = pb.suspend(|| {
            let task = convert();
            report_task(out, &task);
            task
        });
        pb.inc(1);
        task
    });

    pb.finish_and_clear();
    Ok(result)
}

fn no_targets_message(config: &BatchConfig) -> String {
    format!("No {} files found in the folder.", config.target_suffix)
}

fn summary_message(result: &BatchResult) -> String {
    format!(
        "Converted {} of {} file(s), {} failed",
        result.success,
        result.total(),
        result.failed
    )
}

/// 输出单个文件的结果行
fn report_task(out: &mut impl Write, task: &ConversionTask) {
    match task.error() {
        None => output::write_converted(out, &task.path),
        Some(e) => output::write_conversion_error(out, &task.path, e),
    }
}
