use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 配置文件结构 (~/.config/photobook/config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 启动和重置时的文案数量
    pub default_count: usize,
    /// 文案数量上限
    pub max_phrases: usize,
    /// 每个输入框的字符上限
    pub max_length: usize,
    /// 提示消息显示时长（毫秒）
    pub notice_millis: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_count: 5,
            max_phrases: 20,
            max_length: 28,
            notice_millis: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_phrases == 0 {
            return Err(AppError::InvalidConfig(
                "max_phrases must be at least 1".to_string(),
            ));
        }
        if self.default_count == 0 || self.default_count > self.max_phrases {
            return Err(AppError::InvalidConfig(format!(
                "default_count must be between 1 and {}, got {}",
                self.max_phrases, self.default_count
            )));
        }
        if self.max_length == 0 {
            return Err(AppError::InvalidConfig(
                "max_length must be at least 1".to_string(),
            ));
        }
        if self.notice_millis == 0 {
            return Err(AppError::InvalidConfig(
                "notice_millis must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// 获取配置目录路径 (~/.config/photobook/)
pub fn config_dir() -> Result<PathBuf, AppError> {
    let dir = dirs::config_dir()
        .ok_or(AppError::MissingDir("config"))?
        .join("photobook");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// 从TOML文件加载配置，文件不存在时写入默认配置
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        let config = Config::default();
        save_config(&config, path)?;
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|source| AppError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;

    Ok(config)
}

/// 保存配置到TOML文件
pub fn save_config(config: &Config, path: &Path) -> Result<(), AppError> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
