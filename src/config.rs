use dioxus::logger::tracing::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub github_api_base: Option<String>,
    pub github_token: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Load configuration from file
    pub fn load() -> Result<Self, io::Error> {
        Self::load_from(&Self::config_path()?)
    }

    /// 首次启动时写入默认配置文件, 已存在则直接加载
    pub fn init() -> Result<Self, io::Error> {
        Self::init_at(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, defaulting when it does not exist
    pub fn load_from(config_path: &Path) -> Result<Self, io::Error> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(config)
    }

    pub fn init_at(config_path: &Path) -> Result<Self, io::Error> {
        if config_path.exists() {
            return Self::load_from(config_path);
        }

        let config = Self::default();
        config.save_to(config_path)?;
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), io::Error> {
        // Ensure directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf, io::Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
        })?;

        let app_config_dir = config_dir.join("site-footer");
        debug!("Config dir: {:?}", app_config_dir);
        Ok(app_config_dir.join("config.json"))
    }

    /// API base URL without a trailing slash, falling back to the public GitHub API
    pub fn api_base(&self) -> String {
        self.github_api_base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string()
    }

    /// 获取访问令牌, 空字符串视为未设置
    pub fn token(&self) -> Option<&str> {
        self.github_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }
}
