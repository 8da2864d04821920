// ============================================================================
// LocaleX - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序启动和顶层错误处理
// 边界:
//   - ✅ 环境变量装载（.env）
//   - ✅ 诊断日志初始化
//   - ✅ 全局配置初始化
//   - ✅ CLI 分发和退出码处理
//   - ❌ 不应包含命令实现逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

mod cli;
mod core;
mod i18n;
mod models;
mod ui;
mod utils;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use models::config::Config;
use utils::logger::Logger;

#[tokio::main]
async fn main() -> Result<()> {
    // .env 中的接口密钥在进程启动时装载
    dotenv::dotenv().ok();

    // 诊断日志走 tracing，默认只输出警告，RUST_LOG 可调
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    Config::initialize()?;

    if let Err(err) = cli::run_cli().await {
        Logger::error(format!("{:#}", err));
        std::process::exit(1);
    }

    Ok(())
}
