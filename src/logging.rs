//! 日志初始化
//!
//! 终端被界面占用，日志写入 ~/.local/share/tally/tally.log

use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// 获取数据目录路径 (~/.local/share/tally/)
pub fn get_data_dir() -> Result<PathBuf, AppError> {
    let data_dir = dirs::data_dir().ok_or(AppError::NoDataDir)?.join("tally");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// `RUST_LOG` 优先；未设置、为空或无法解析时使用配置中的过滤器
fn build_filter(env_filter: Option<&str>, default_filter: &str) -> Result<EnvFilter, AppError> {
    if let Some(directives) = env_filter.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok(filter),
            Err(e) => eprintln!("忽略无效的 {}: {e}", EnvFilter::DEFAULT_ENV),
        }
    }

    EnvFilter::try_new(default_filter).map_err(|e| AppError::Logging(e.to_string()))
}

pub fn init_logging(default_filter: &str, log_path: &Path) -> Result<(), AppError> {
    let env_filter = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_filter.as_deref(), default_filter)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
