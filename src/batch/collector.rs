//! # 文件收集器
//!
//! 列出工作目录下文件名以目标后缀结尾的条目。
//!
//! ## 功能
//! - 只看目录的直接子条目（不递归）
//! - 后缀匹配区分大小写
//! - 保持目录枚举顺序，不排序
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::config::BatchConfig;
use crate::error::{Bms2MidiError, Result};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 扫描目录
    input: PathBuf,
    /// 文件名后缀
    suffix: String,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf, suffix: &str) -> Self {
        Self {
            input,
            suffix: suffix.to_string(),
        }
    }

    /// 按批处理配置创建
    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(config.working_directory.clone(), &config.target_suffix)
    }

    /// 收集所有匹配的条目
    ///
    /// 任何枚举错误都会中止收集，不做跳过处理。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(&self.input).min_depth(1).max_depth(1);

        let mut targets = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| Bms2MidiError::DirectoryEnumerationFailed {
                path: self.input.display().to_string(),
                source: e.into(),
            })?;

            if self.matches_suffix(entry.path()) {
                targets.push(self.input.join(entry.file_name()));
            }
        }

        Ok(targets)
    }

    /// 检查文件名是否以后缀结尾
    fn matches_suffix(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(self.suffix.as_str()))
            .unwrap_or(false)
    }
}

/// 列出配置目录下的所有目标文件
pub fn list_targets(config: &BatchConfig) -> Result<Vec<PathBuf>> {
    FileCollector::from_config(config).collect()
}
