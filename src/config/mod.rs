use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{AlgoError, AlgoResult};
use crate::services::algorithm::sorting::BucketSizing;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub sort: SortConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// flexi_logger 级别描述，如 "info" 或 "sortgraph=debug"
    pub level: String,
    /// 为 false 时输出到 stderr
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "sortgraph".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 排序算法的可调参数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SortConfig {
    /// 桶排序的划分粒度
    pub bucket_sizing: BucketSizing,
    /// 计数排序允许的最大键范围（max - min + 1）
    pub max_counting_range: u64,
}

/// 计数排序默认允许的键范围：16M 个计数槽
pub const DEFAULT_MAX_COUNTING_RANGE: u64 = 1 << 24;

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            bucket_sizing: BucketSizing::default(),
            max_counting_range: DEFAULT_MAX_COUNTING_RANGE,
        }
    }
}

impl SortConfig {
    pub fn validate(&self) -> AlgoResult<()> {
        self.bucket_sizing.validate()?;
        if self.max_counting_range == 0 {
            return Err(AlgoError::config("sort.max_counting_range 必须大于 0"));
        }
        Ok(())
    }
}

impl Config {
    /// 从 TOML 文件加载配置，缺失的字段使用默认值
    pub fn load<P: AsRef<Path>>(path: P) -> AlgoResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            AlgoError::config(format!("无法读取配置文件 '{}': {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        log::debug!("配置加载完成: {}", path.display());
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> AlgoResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> AlgoResult<()> {
        if self.log.level.trim().is_empty() {
            return Err(AlgoError::config("log.level 不能为空"));
        }
        if self.log.to_file {
            if self.log.file.trim().is_empty() {
                return Err(AlgoError::config("log.file 不能为空"));
            }
            if self.log.max_files == 0 {
                return Err(AlgoError::config("log.max_files 必须大于 0"));
            }
        }
        self.sort.validate().map_err(|e| match e {
            AlgoError::InvalidArgument(msg) => AlgoError::Config(msg),
            other => other,
        })
    }
}
