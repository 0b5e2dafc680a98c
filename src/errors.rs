//! 错误类型定义
//!
//! 剪贴板写入失败只在界面上提示，不会向上传播；
//! 其余错误只会在启动阶段出现（配置、日志、目录）。

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 剪贴板后端错误
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard backend error: {0}")]
    Backend(#[from] arboard::Error),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// 应用启动阶段的错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("logger setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("platform {0} directory is unavailable")]
    MissingDir(&'static str),
}
