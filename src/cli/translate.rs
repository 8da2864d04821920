// ============================================================================
// LocaleX - CLI Translate 命令
// ============================================================================
//
// 文件: src/cli/translate.rs
// 职责: 翻译命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 输入/输出/语言解析和运行编排
//   - ✅ 调用核心引擎执行翻译
//   - ❌ 不应包含树遍历实现
//   - ❌ 不应包含 HTTP 请求细节
//   - ❌ 不应包含缓存文件格式处理
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::{count_strings, output, DeepLClient, TranslationCache, TreeTranslator};
use crate::models::config::Config;
use crate::models::TranslatePolicy;
use crate::ui::progress::ProgressReporter;
use crate::ui::summary::render_translation_summary;
use crate::utils::constants;
use crate::utils::files;
use crate::utils::logger::Logger;
use crate::utils::prompt;
use crate::{t, tf};

/// 翻译命令
#[derive(Debug, Args)]
pub struct TranslateArgs {
    /// Folder or file to look for translation source
    pub path: PathBuf,

    /// Target language code (2 letters)
    #[arg(short = 'l', long)]
    pub locale: Option<String>,

    /// Output file name (defaults to <locale>.json)
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Indentation spaces for the output file
    #[arg(short = 'i', long)]
    pub indent: Option<usize>,

    /// Sleep time between API calls (milliseconds)
    #[arg(short = 's', long)]
    pub sleep_ms: Option<u64>,

    /// Keys to skip (copied verbatim, glob patterns allowed)
    #[arg(long, num_args = 1..)]
    pub skip: Vec<String>,

    /// Keys to keep from the existing output file
    #[arg(long, num_args = 1..)]
    pub keep: Vec<String>,

    /// Disable the persistent translation cache
    #[arg(long)]
    pub no_cache: bool,

    /// Source strings to drop from the warmed cache
    #[arg(long, num_args = 1..)]
    pub invalidate: Vec<String>,

    /// Ask before overwriting an existing output file
    #[arg(long)]
    pub confirm_overwrite: bool,
}

pub async fn handle_translate(args: TranslateArgs) -> Result<()> {
    // 缺少密钥属于配置失败，在任何文件 IO 之前中止
    let auth_env = Config::get_auth_key_env();
    let auth_key = std::env::var(&auth_env)
        .map_err(|_| anyhow::anyhow!(tf!("error.missing_auth_key", auth_env)))?;

    let input_file = files::resolve_input_file(&args.path)?;
    let lang_code = resolve_target_locale(args.locale.as_deref(), &input_file)?;
    let output_file = files::resolve_output_path(
        args.output.as_deref(),
        &lang_code,
        &input_file,
        args.confirm_overwrite,
    )?;

    Logger::info(tf!("translate.start", input_file.display(), lang_code));

    // 源文档
    let content = fs::read_to_string(&input_file)
        .with_context(|| tf!("error.read_source", input_file.display()))?;
    let source: Value = serde_json::from_str(&content)
        .with_context(|| tf!("error.parse_source", input_file.display()))?;

    // keep 策略的数据源: 已有输出文件
    let existing = output::load_existing(&output_file)?;

    // 持久化缓存预热，并按要求失效指定条目
    let cache_enabled = Config::get_cache_enabled() && !args.no_cache;
    let cache = if cache_enabled {
        let mut cache = TranslationCache::for_locale(&Config::get_cache_dir(), &lang_code)?;
        if cache.seeded() > 0 {
            Logger::info(tf!(
                "translate.cache_seeded",
                cache.seeded(),
                cache.path().display()
            ));
        }
        if !args.invalidate.is_empty() {
            let dropped = cache.invalidate(&args.invalidate);
            if dropped > 0 {
                Logger::info(tf!("translate.cache_invalidated", dropped));
            }
        }
        Some(cache)
    } else {
        tracing::debug!("translation cache disabled for this run");
        if Config::get_verbose() {
            Logger::info(t!("translate.cache_disabled"));
        }
        None
    };

    // 配置文件和命令行的策略列表合并生效
    let mut skip = Config::get_skip_keys();
    skip.extend(args.skip.iter().cloned());
    let mut keep = Config::get_keep_keys();
    keep.extend(args.keep.iter().cloned());
    let policy = TranslatePolicy::new(skip, keep);

    let sleep_ms = args.sleep_ms.unwrap_or_else(Config::get_sleep_ms);
    let indent = args.indent.unwrap_or_else(Config::get_indent);

    let client = DeepLClient::new(auth_key, &lang_code, Duration::from_millis(sleep_ms));

    let mut translator = TreeTranslator::new(&client, policy);
    if let Some(cache) = cache {
        translator = translator.with_cache(cache);
    }
    if Config::get_show_progress() && !Config::get_verbose() {
        let total = count_strings(&source) as u64;
        translator = translator.with_progress(ProgressReporter::new(total));
    }

    let start = Instant::now();
    let result = translator.translate_tree(&source, &existing).await;
    translator.finish_progress();

    let stats = translator.stats();
    tracing::debug!(
        leaves = stats.total(),
        api_calls = stats.api_calls(),
        "translation pass finished"
    );

    output::save_output(&result, &output_file, indent)?;

    // 缓存整体重写，镜像本次运行的全部译文
    if let Some(cache) = translator.take_cache() {
        cache.persist()?;
        if Config::get_verbose() {
            Logger::info(tf!("translate.cache_persisted", cache.path().display()));
        }
    }

    render_translation_summary(translator.stats(), start.elapsed());
    Logger::success(tf!("translate.saved", output_file.display()));

    Ok(())
}

/// 解析目标语言代码
///
/// 必须是两位字母，缺失或不合法时交互式询问；与源文件主名相同时
/// 视为翻译回源语言，直接报错退出。
fn resolve_target_locale(locale: Option<&str>, input_file: &Path) -> Result<String> {
    let mut lang_code = locale.unwrap_or_default().trim().to_string();
    while lang_code.chars().count() != constants::LOCALE_CODE_LEN {
        lang_code = prompt::input_line(t!("locale.prompt"))?;
    }

    if lang_code.eq_ignore_ascii_case(&files::file_stem(input_file)) {
        anyhow::bail!(t!("locale.same_language"));
    }

    Ok(lang_code)
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target_locale_rejects_source_language() {
        let input = Path::new("/tmp/locales/en.json");

        assert!(resolve_target_locale(Some("en"), input).is_err());
        assert!(resolve_target_locale(Some("EN"), input).is_err());
    }

    #[test]
    fn test_resolve_target_locale_accepts_other_language() {
        let input = Path::new("/tmp/locales/en.json");

        let code = resolve_target_locale(Some("es"), input).unwrap();
        assert_eq!(code, "es");
    }
}
