use anyhow::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
pub struct RawFrontMatter {
    /// 逗号分隔的标签串，如 "rust, networking"
    pub tag: Option<String>,
    pub draft: Option<bool>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[allow(dead_code)]
pub struct ParsedContent {
    pub front_matter: RawFrontMatter,
    pub body: String,
}

/// 解析 Markdown 文件，分离 Front Matter 和正文
pub fn parse_file(path: &Path) -> Result<ParsedContent> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("读取 {} 失败：{}", path.display(), e))?;
    parse_content(&content).map_err(|e| anyhow::anyhow!("{}：{}", path.display(), e))
}

/// 解析内容字符串，分离 Front Matter 和正文
pub fn parse_content(content: &str) -> Result<ParsedContent> {
    let matter = gray_matter::Matter::<gray_matter::engine::YAML>::new();
    let result = matter.parse_with_struct::<RawFrontMatter>(content);

    match result {
        Some(parsed) => Ok(ParsedContent {
            front_matter: parsed.data,
            body: parsed.content,
        }),
        None => {
            // 有分隔符但解析失败视为错误；没有 Front Matter 则当正文处理
            if content.starts_with("---") {
                anyhow::bail!("Front Matter 解析失败");
            }
            let parsed = matter.parse(content);
            Ok(ParsedContent {
                front_matter: RawFrontMatter::default(),
                body: parsed.content,
            })
        }
    }
}

/// 拆分逗号分隔的标签串，去除两侧空白，丢弃空项
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
