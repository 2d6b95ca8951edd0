//! # convert 参数定义
//!
//! 所有参数都是可选的；不带参数运行时转换当前目录下的全部 .bms 文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use crate::config::{BatchConfig, DEFAULT_CONVERTER, DEFAULT_SUFFIX};
use crate::error::Result;

use clap::Args;
use std::path::PathBuf;

/// 批量转换参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory containing the charts (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// BMS to MIDI converter executable
    #[arg(short, long, env = "BMS2MIDI_CONVERTER", default_value = DEFAULT_CONVERTER)]
    pub converter: PathBuf,

    /// File name suffix to convert (case-sensitive)
    #[arg(short, long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Pass '--instruments' to the converter after each file path
    #[arg(long, default_value_t = false)]
    pub instruments: bool,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl ConvertArgs {
    /// 转为批处理配置
    pub fn to_config(&self) -> Result<BatchConfig> {
        let config = match &self.dir {
            Some(dir) => BatchConfig::new(dir.clone()),
            None => BatchConfig::from_current_dir()?,
        };

        let extra: &[&str] = if self.instruments {
            &["--instruments"]
        } else {
            &[]
        };

        Ok(config
            .with_converter(self.converter.clone())
            .with_suffix(self.suffix.clone())
            .with_converter_args(extra.iter().copied()))
    }
}
