//! 文件日志
//!
//! 终端被 TUI 占用，日志只写文件。
//! 只记录数量、长度、结果等元数据，不记录文案内容。

use std::fs;
use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::errors::AppError;

const LOG_FILE_BASENAME: &str = "photobook";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

/// 获取日志目录路径 (~/.local/share/photobook/logs/)
pub fn log_dir() -> Result<PathBuf, AppError> {
    let dir = dirs::data_dir()
        .ok_or(AppError::MissingDir("data"))?
        .join("photobook")
        .join("logs");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 启动文件日志，返回的句柄需要持有到进程结束
pub fn init_logging(level: &str, dir: &Path) -> Result<LoggerHandle, AppError> {
    let handle = Logger::try_with_str(level)?
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()?;

    log::info!(
        "event=app_start platform={} version={} level={}",
        std::env::consts::OS,
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(handle)
}
