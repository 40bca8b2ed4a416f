use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 启动与终端相关的错误，计数器本身的操作不会失败
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),

    #[error("配置文件 {} 无效: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("无法获取用户配置目录")]
    NoConfigDir,

    #[error("无法获取用户数据目录")]
    NoDataDir,

    #[error("日志初始化失败: {0}")]
    Logging(String),
}
