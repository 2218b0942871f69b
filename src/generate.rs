use crate::config::Config;
use crate::content::frontmatter;
use anyhow::Result;
use rayon::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// 单次生成的统计信息
pub struct GenerateStats {
    pub posts_scanned: usize,
    pub posts_skipped: usize,
    pub distinct_tags: usize,
}

/// 扫描文章目录，统计标签出现次数并写入输出文件
///
/// 任一文章读取或解析失败时整体失败，不更新输出文件
pub fn run(project_root: &Path, config: &Config) -> Result<GenerateStats> {
    let posts_dir = project_root.join(&config.posts_dir);
    let entries = list_posts(&posts_dir)?;

    // 读取解析并行进行，合并在当前线程串行完成
    let per_post: Vec<Option<Vec<String>>> = entries
        .par_iter()
        .map(|path| collect_tags(path))
        .collect::<Result<_>>()?;

    let mut tally: HashMap<String, u64> = HashMap::new();
    let mut skipped = 0usize;
    for tags in &per_post {
        match tags {
            Some(tags) => {
                for tag in tags {
                    *tally.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            None => skipped += 1,
        }
    }

    let output_path = project_root.join(&config.output);
    write_tally(&output_path, &tally)?;

    Ok(GenerateStats {
        posts_scanned: entries.len(),
        posts_skipped: skipped,
        distinct_tags: tally.len(),
    })
}

/// 列出文章目录下的 Markdown 文件，跳过 index.* 列表页
pub(crate) fn list_posts(posts_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(posts_dir)
        .map_err(|e| anyhow::anyhow!("读取文章目录 {} 失败：{}", posts_dir.display(), e))?;

    let mut entries: Vec<PathBuf> = read_dir
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| is_post_file(p))
        .collect();

    entries.sort();
    Ok(entries)
}

fn is_post_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    // index.* 是列表页，不参与统计
    if name.starts_with("index.") {
        return false;
    }
    path.extension()
        .is_some_and(|ext| ext == "md" || ext == "mdx" || ext == "markdown")
}

/// 解析单篇文章，返回其标签列表；草稿和缺少 tag 字段的文章返回 None
fn collect_tags(path: &Path) -> Result<Option<Vec<String>>> {
    let parsed = frontmatter::parse_file(path)?;
    let fm = parsed.front_matter;

    if fm.draft.unwrap_or(false) {
        tracing::debug!("跳过草稿：{}", path.display());
        return Ok(None);
    }

    let tags = fm
        .tag
        .as_deref()
        .map(frontmatter::split_tags)
        .unwrap_or_default();
    if tags.is_empty() {
        tracing::warn!("文章缺少 tag 字段，已跳过：{}", path.display());
        return Ok(None);
    }

    Ok(Some(tags))
}

/// 序列化统计结果并写入输出文件，必要时创建父目录
fn write_tally(output_path: &Path, tally: &HashMap<String, u64>) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("创建输出目录 {} 失败：{}", parent.display(), e))?;
    }
    let json = serde_json::to_string(tally)?;
    std::fs::write(output_path, json)
        .map_err(|e| anyhow::anyhow!("写入 {} 失败：{}", output_path.display(), e))?;
    tracing::info!("已生成 {}", output_path.display());
    Ok(())
}
