use crate::config::Config;
use crate::content::frontmatter;
use crate::generate;
use anyhow::Result;
use std::path::Path;

pub struct CheckResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// 检查配置和文章目录，收集会影响标签统计的问题
pub fn run(project_root: &Path) -> Result<CheckResult> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    check_config(project_root, &mut errors, &mut warnings);
    check_posts(project_root, &mut errors, &mut warnings);

    Ok(CheckResult { errors, warnings })
}

fn check_config(root: &Path, errors: &mut Vec<String>, _warnings: &mut Vec<String>) {
    // 配置文件可选，存在时必须能解析
    let config_path = root.join("gentags.toml");
    if !config_path.exists() {
        return;
    }
    if let Err(e) = Config::load(root) {
        errors.push(format!("{e}"));
    }
}

fn check_posts(root: &Path, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    let config = match Config::load(root) {
        Ok(cfg) => cfg,
        Err(_) => return,
    };

    let posts_dir = root.join(&config.posts_dir);
    if !posts_dir.exists() {
        errors.push(format!("文章目录 {}/ 不存在", config.posts_dir));
        return;
    }

    let entries = match generate::list_posts(&posts_dir) {
        Ok(entries) => entries,
        Err(e) => {
            errors.push(format!("{e}"));
            return;
        }
    };

    if entries.is_empty() {
        warnings.push(format!("文章目录 {}/ 为空", config.posts_dir));
        return;
    }

    for path in &entries {
        let parsed = match frontmatter::parse_file(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                errors.push(format!("{e}"));
                continue;
            }
        };

        let fm = parsed.front_matter;
        if fm.draft.unwrap_or(false) {
            continue;
        }

        let has_tags = fm
            .tag
            .as_deref()
            .is_some_and(|raw| !frontmatter::split_tags(raw).is_empty());
        if !has_tags {
            warnings.push(format!("文章 {} 缺少 tag 字段", path.display()));
        }
    }
}
