//! # 批量执行器
//!
//! 逐个调用外部转换器，收集每个文件的结果。
//!
//! ## 功能
//! - 严格顺序执行，同一时刻只有一个子进程
//! - 单个文件失败不会中止批处理
//! - 成功/失败计数
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `config.rs` 中的转换器设置

use crate::config::BatchConfig;
use crate::error::Bms2MidiError;

use std::path::{Path, PathBuf};
use std::process::Command;

/// 单个文件的转换结果
///
/// 进程非零退出与无法启动都归为 `Failed`，仅错误详情不同。
#[derive(Debug)]
pub enum ConversionOutcome {
    Success,
    Failed(Bms2MidiError),
}

/// 单个转换任务
#[derive(Debug)]
pub struct ConversionTask {
    pub path: PathBuf,
    pub outcome: Option<ConversionOutcome>,
}

impl ConversionTask {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            outcome: None,
        }
    }

    /// 失败详情；未执行或成功时为 `None`
    pub fn error(&self) -> Option<&Bms2MidiError> {
        match self.outcome.as_ref()? {
            ConversionOutcome::Success => None,
            ConversionOutcome::Failed(e) => Some(e),
        }
    }
}

/// 调用转换器处理单个文件
///
/// 同步等待子进程退出，没有超时。
pub fn convert_one(config: &BatchConfig, path: &Path) -> ConversionOutcome {
    let status = Command::new(&config.converter_path)
        .arg(path)
        .args(&config.converter_args)
        .status();

    match status {
        Ok(status) if status.success() => ConversionOutcome::Success,
        Ok(status) => ConversionOutcome::Failed(Bms2MidiError::ConversionProcessFailed {
            code: status.code(),
        }),
        Err(e) => ConversionOutcome::Failed(Bms2MidiError::ConversionSpawnFailed {
            command: config.converter_path.display().to_string(),
            source: e,
        }),
    }
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功数量
    pub success: usize,
    /// 失败数量
    pub failed: usize,
}

impl BatchResult {
    /// 合并单个任务结果
    pub fn merge(&mut self, task: &ConversionTask) {
        match task.error() {
            None => self.success += 1,
            Some(_) => self.failed += 1,
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner<'a> {
    config: &'a BatchConfig,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(config: &'a BatchConfig) -> Self {
        Self { config }
    }

    /// 转换单个文件并生成任务记录
    pub fn convert(&self, path: &Path) -> ConversionTask {
        let mut task = ConversionTask::new(path.to_path_buf());
        task.outcome = Some(convert_one(self.config, path));
        task
    }

    /// 按给定顺序逐个转换
    ///
    /// `step` 包裹每个文件的完整处理过程：它收到一个启动转换器并等待结果的闭包，
    /// 必须恰好调用一次并返回得到的任务。
    pub fn run<F>(&self, files: Vec<PathBuf>, mut step: F) -> BatchResult
    where
        F: FnMut(&dyn Fn() -> ConversionTask) -> ConversionTask,
    {
        let mut batch_result = BatchResult::default();

        for file in &files {
            let convert = || self.convert(file);
            let task = step(&convert);
            batch_result.merge(&task);
        }

        batch_result
    }
}
