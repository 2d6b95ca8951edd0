//! # 统一错误处理模块
//!
//! 定义 bms2midi 的所有错误类型，使用 `thiserror` 派生。
//!
//! 只有 `DirectoryEnumerationFailed` 会终止整个批处理；
//! 单个文件的转换失败只用于格式化输出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// bms2midi 统一错误类型
#[derive(Error, Debug)]
pub enum Bms2MidiError {
    // ─────────────────────────────────────────────────────────────
    // 目录错误（致命）
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to enumerate directory: {path}: {source}")]
    DirectoryEnumerationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 外部转换器错误（单文件，非致命）
    // ─────────────────────────────────────────────────────────────
    #[error("converter exited with {}", exit_detail(.code))]
    ConversionProcessFailed { code: Option<i32> },

    #[error("failed to start '{command}': {source}")]
    ConversionSpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn exit_detail(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("non-zero exit status {}", code),
        None => "no exit status (terminated by signal)".to_string(),
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, Bms2MidiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_failed_message() {
        let err = Bms2MidiError::ConversionProcessFailed { code: Some(1) };
        assert_eq!(err.to_string(), "converter exited with non-zero exit status 1");

        let err = Bms2MidiError::ConversionProcessFailed { code: None };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_directory_error_names_cause() {
        let err = Bms2MidiError::DirectoryEnumerationFailed {
            path: "charts".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to enumerate directory: charts: no such directory"
        );
    }

    #[test]
    fn test_spawn_failed_message() {
        let err = Bms2MidiError::ConversionSpawnFailed {
            command: "bmsanalyzer.exe".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to start 'bmsanalyzer.exe': not found");
    }
}
