use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// 文章目录，相对于项目根目录
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    /// 输出文件路径，相对于项目根目录
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// 读取 gentags.toml；文件不存在时返回默认配置
    pub fn load(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("gentags.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("读取 gentags.toml 失败：{}", e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("解析 gentags.toml 失败：{}", e))?;
        Ok(config)
    }
}

// 默认值函数
fn default_posts_dir() -> String { "pages/posts".into() }
fn default_output() -> String { "public/tags.json".into() }
fn default_log_level() -> String { "info".into() }

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            output: default_output(),
            log_level: default_log_level(),
        }
    }
}
