use serde_derive::Deserialize;
use serde_derive::Serialize;

use log::{error, warn};
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// `/static/` 映射到的资源目录
    www_root: String,
    port: u16,
    worker_threads: usize,
    cache_size: usize,
    local: bool,
    #[serde(default = "default_site_title")]
    site_title: String,
    #[serde(default = "default_max_cached_file_size")]
    max_cached_file_size: u64,
}

fn default_site_title() -> String {
    "Yobatis".to_string()
}

fn default_max_cached_file_size() -> u64 {
    1048576 // 1MB
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            www_root: "static".to_string(),
            port: 7878,
            worker_threads: 0,
            cache_size: 5,
            local: true,
            site_title: default_site_title(),
            max_cached_file_size: default_max_cached_file_size(),
        }
    }

    /// 从 TOML 文件加载配置。文件缺失或格式错误时记录日志并使用默认配置。
    pub fn from_toml(filename: &str) -> Self {
        let raw_config = match fs::read_to_string(filename) {
            Ok(s) => Self::from_toml_str(&s),
            Err(e) => {
                error!("无法读取配置文件{}：{}，使用默认配置", filename, e);
                Config::new()
            }
        };
        raw_config.normalized()
    }

    fn from_toml_str(s: &str) -> Self {
        match toml::from_str(s) {
            Ok(t) => t,
            Err(e) => {
                error!("无法成功从配置文件构建配置对象：{}，使用默认配置", e);
                Config::new()
            }
        }
    }

    fn normalized(mut self) -> Self {
        if self.worker_threads == 0 {
            self.worker_threads = num_cpus::get();
        }
        if self.cache_size == 0 {
            warn!("cache_size被设置为0，但目前尚不支持禁用缓存，因此该值将被改为5。");
            self.cache_size = 5;
        }
        self
    }
}

impl Config {
    pub fn www_root(&self) -> &str {
        &self.www_root
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    pub fn cache_size(&self) -> usize {
        self.cache_size
    }

    pub fn local(&self) -> bool {
        self.local
    }

    pub fn site_title(&self) -> &str {
        &self.site_title
    }

    pub fn max_cached_file_size(&self) -> u64 {
        self.max_cached_file_size
    }
}
