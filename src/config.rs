//! 配置加载 (~/.config/tally/config.toml)
//!
//! 文件不存在时使用默认值，每个字段都可省略。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub increment: String,
    pub reset: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Counter".to_string(),
            increment: "Click me".to_string(),
            reset: "Reset".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` 语法，`RUST_LOG` 优先
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub labels: Labels,
    pub log: LogConfig,
}

/// 默认配置文件路径
pub fn default_config_path() -> Result<PathBuf, AppError> {
    let dir = dirs::config_dir().ok_or(AppError::NoConfigDir)?;
    Ok(dir.join("tally").join("config.toml"))
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}
