use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod check;
mod config;
mod content;
mod generate;

#[derive(Parser)]
#[command(name = "gentags", about = "博客标签统计工具", version = long_version())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 扫描文章目录，生成 tags.json
    Generate {
        /// 项目根目录（默认当前目录）
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// 文章目录（覆盖配置文件）
        #[arg(long)]
        posts_dir: Option<String>,

        /// 输出文件路径（覆盖配置文件）
        #[arg(long)]
        output: Option<String>,
    },

    /// 检查配置和文章目录
    Check {
        /// 项目根目录（默认当前目录）
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // None 等同于 Generate { root: ".", posts_dir: None, output: None }
    let command = cli.command.unwrap_or(Commands::Generate {
        root: PathBuf::from("."),
        posts_dir: None,
        output: None,
    });

    // 使用配置中的日志级别作为默认值
    let default_level = match &command {
        Commands::Generate { root, .. } | Commands::Check { root, .. } => {
            config::Config::load(&root.canonicalize().unwrap_or_else(|_| root.clone()))
                .ok()
                .map(|c| c.log_level.clone())
        }
    };

    let default_level = default_level.as_deref().unwrap_or("info");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match command {
        Commands::Generate {
            root,
            posts_dir,
            output,
        } => {
            let root = root.canonicalize()?;
            let mut config = config::Config::load(&root)?;
            if let Some(dir) = posts_dir {
                config.posts_dir = dir;
            }
            if let Some(path) = output {
                config.output = path;
            }

            let stats = generate::run(&root, &config)?;
            tracing::info!(
                "统计完成：{} 篇文章（跳过 {}），{} 个标签",
                stats.posts_scanned,
                stats.posts_skipped,
                stats.distinct_tags
            );
        }
        Commands::Check { root } => {
            let root = root.canonicalize()?;
            let result = check::run(&root)?;

            for w in &result.warnings {
                tracing::warn!("{w}");
            }
            for e in &result.errors {
                tracing::error!("{e}");
            }

            if result.errors.is_empty() {
                tracing::info!(
                    "检查通过（{} 个警告）",
                    result.warnings.len()
                );
            } else {
                anyhow::bail!(
                    "检查未通过：{} 个错误，{} 个警告",
                    result.errors.len(),
                    result.warnings.len()
                );
            }
        }
    }

    Ok(())
}

const fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\ncommit:  ",
        env!("GENTAGS_GIT_COMMIT"),
        "\nbuild:   ",
        env!("GENTAGS_BUILD_TIME"),
        "\ntarget:  ",
        env!("GENTAGS_BUILD_TARGET"),
        "\nprofile: ",
        env!("GENTAGS_BUILD_PROFILE"),
    )
}
