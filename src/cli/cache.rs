// ============================================================================
// LocaleX - CLI Cache 命令
// ============================================================================
//
// 文件: src/cli/cache.rs
// 职责: 持久化缓存的查看和清理命令
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 缓存文件列举、展示和删除
//   - ❌ 不应包含缓存文件格式处理（见 core/cache.rs）
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

use anyhow::Result;
use clap::{Args, Subcommand};
use std::fs;

use crate::core::TranslationCache;
use crate::models::config::Config;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::files;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 缓存维护命令
#[derive(Debug, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommand,
}

#[derive(Debug, Subcommand)]
pub enum CacheCommand {
    /// Show cached translations for a locale
    Show {
        /// Target language code
        #[arg(short = 'l', long)]
        locale: String,
    },
    /// Remove persisted cache files
    Clear {
        /// Target language code (all locales when omitted)
        #[arg(short = 'l', long)]
        locale: Option<String>,
    },
}

pub fn handle_cache(args: CacheArgs) -> Result<()> {
    match args.command {
        CacheCommand::Show { locale } => show_cache(&locale),
        CacheCommand::Clear { locale } => clear_cache(locale.as_deref()),
    }
}

/// 展示指定语言的缓存条目
fn show_cache(locale: &str) -> Result<()> {
    let dir = Config::get_cache_dir();
    let path = dir.join(format!("{}.json", locale));

    if !path.is_file() {
        Logger::info(tf!("cache.empty", locale));
        return Ok(());
    }

    let cache = TranslationCache::for_locale(&dir, locale)?;
    if cache.is_empty() {
        Logger::info(tf!("cache.empty", locale));
        return Ok(());
    }

    Logger::info(tf!("cache.show_title", locale, cache.len()));
    for (source, translated) in cache.entries() {
        Logger::plain(format!(
            "  {} {} {}",
            source,
            Colors::dim(icons::ARROW),
            translated
        ));
    }

    Ok(())
}

/// 删除一个或全部语言的缓存文件
fn clear_cache(locale: Option<&str>) -> Result<()> {
    let dir = Config::get_cache_dir();
    if !dir.is_dir() {
        Logger::info(t!("cache.dir_missing"));
        return Ok(());
    }

    match locale {
        Some(code) => {
            let path = dir.join(format!("{}.json", code));
            if path.is_file() {
                fs::remove_file(&path)?;
                Logger::success(tf!("cache.cleared", path.display()));
            } else {
                Logger::info(tf!("cache.empty", code));
            }
        }
        None => {
            let cache_files = files::find_json_files(&dir)?;
            let count = cache_files.len();
            for file in cache_files {
                fs::remove_file(&file)?;
            }
            Logger::success(tf!("cache.cleared_all", count));
        }
    }

    Ok(())
}
