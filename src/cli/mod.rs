// ============================================================================
// LocaleX - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod cache;
pub mod init;
pub mod translate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::config::{Config, RuntimeArgs};
use cache::{handle_cache, CacheArgs};
use init::{handle_init, InitArgs};
use translate::{handle_translate, TranslateArgs};

/// LocaleX - Lightweight JSON locale bundle translator
#[derive(Debug, Parser)]
#[command(name = "localex")]
#[command(about = "Lightweight JSON locale bundle translator powered by DeepL")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(long, global = true)]
    pub language: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Disable progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Translate a JSON locale bundle into a target locale
    Translate(TranslateArgs),
    /// Initialize configuration file
    Init(InitArgs),
    /// Inspect or clear persisted translation caches
    Cache(CacheArgs),
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli);
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    match cli.command {
        Commands::Translate(args) => handle_translate(args).await,
        Commands::Init(args) => handle_init(args),
        Commands::Cache(args) => handle_cache(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        show_progress: if cli.no_progress { Some(false) } else { None },
        language: cli.language.clone(),
    }
}
