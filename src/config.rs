//! # 批处理配置
//!
//! 转换器路径、目标后缀与工作目录集中在 `BatchConfig` 中，
//! 由调用方显式传入批处理流程。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 构造
//! - 被 `batch/` 读取

use crate::error::{Bms2MidiError, Result};

use std::ffi::OsString;
use std::path::PathBuf;

/// 默认的 BMS -> MIDI 转换器
pub const DEFAULT_CONVERTER: &str = "bmsanalyzer.exe";

/// 默认的目标文件后缀
pub const DEFAULT_SUFFIX: &str = ".bms";

/// 批处理配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// 转换器可执行文件（名称或路径）
    pub converter_path: PathBuf,
    /// 目标文件名后缀（区分大小写）
    pub target_suffix: String,
    /// 扫描的目录
    pub working_directory: PathBuf,
    /// 追加在文件路径之后的转换器参数
    pub converter_args: Vec<OsString>,
}

impl BatchConfig {
    /// 使用默认转换器和后缀创建配置
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            converter_path: PathBuf::from(DEFAULT_CONVERTER),
            target_suffix: DEFAULT_SUFFIX.to_string(),
            working_directory: working_directory.into(),
            converter_args: Vec::new(),
        }
    }

    /// 以进程当前目录为工作目录
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| Bms2MidiError::DirectoryEnumerationFailed {
            path: ".".to_string(),
            source: e,
        })?;
        Ok(Self::new(cwd))
    }

    pub fn with_converter(mut self, converter: impl Into<PathBuf>) -> Self {
        self.converter_path = converter.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.target_suffix = suffix.into();
        self
    }

    pub fn with_converter_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.converter_args = args.into_iter().map(Into::into).collect();
        self
    }
}
