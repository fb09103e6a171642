use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::quadtree::{Rectangle, DEFAULT_MAX_DEPTH, DEFAULT_MAX_ITEMS};

/// spindex 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// 索引配置
    pub index: IndexSettings,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 索引配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSettings {
    /// 每个象限分裂前允许的最大条目数
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// 最大分裂深度
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// 索引跟踪的范围
    #[serde(default)]
    pub bbox: Option<Rectangle>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_bbox() -> Rectangle {
    Rectangle::new(-11.0, -33.0, 100.0, 100.0)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            index: IndexSettings {
                max_items: default_max_items(),
                max_depth: default_max_depth(),
                bbox: Some(default_bbox()),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl IndexConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（SPINDEX__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use spindex::config::IndexConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = IndexConfig::from_file("spindex.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("SPINDEX").separator("__"))
            .build()
            .map_err(|e| format!("Failed to load config: {}", e))?;

        Ok(settings
            .try_deserialize()
            .map_err(|e| format!("Failed to parse config: {}", e))?)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, toml_string)
            .map_err(|e| format!("Failed to write config file: {}", e))?;
        Ok(())
    }

    /// 验证配置
    ///
    /// 检查配置的合法性，包括：
    /// - 索引范围
    /// - 日志级别
    /// - 日志输出
    pub fn validate(&self) -> Result<(), String> {
        // 验证索引范围
        match &self.index.bbox {
            Some(bbox) if !bbox.is_finite() => {
                return Err(format!("Index bbox {} has non-finite coordinates", bbox));
            }
            Some(_) => {}
            None => return Err("Index bbox is not specified".to_string()),
        }

        // 验证日志级别
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                ))
            }
        }

        // 验证日志输出
        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_none() => {
                return Err("Log output is 'file' but log_file path is not specified".to_string());
            }
            "file" => {}
            other => {
                return Err(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                ))
            }
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 spindex Configuration:");
        println!("   Max Items:   {}", self.index.max_items);
        println!("   Max Depth:   {}", self.index.max_depth);
        match &self.index.bbox {
            Some(bbox) => println!("   Extent:      {}", bbox),
            None => println!("   Extent:      <unset>"),
        }
        println!();
        println!("   Log Level:   {}", self.logging.level);
        println!("   Log Output:  {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:    {}", log_file.display());
        }
        println!();
    }
}
