// ============================================================================
// LocaleX - 运行结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 翻译运行结果汇总显示
// 边界:
//   - ✅ 运行统计汇总显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含统计数据收集
//   - ❌ 不应包含文件操作
//
// ============================================================================

use std::time::Duration;

use crate::models::RunStats;
use crate::utils::colors::Colors;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 渲染翻译运行汇总
pub fn render_translation_summary(stats: &RunStats, duration: Duration) {
    Logger::plain("");
    Logger::plain(format!(
        "{} {}",
        Colors::info(icons::SUMMARY),
        Colors::info(&t!("summary.title"))
    ));

    Logger::plain(format!(
        "  {} {}",
        Colors::success(icons::TRANSLATE),
        tf!("summary.translated", stats.translated)
    ));
    Logger::plain(format!(
        "  {} {}",
        Colors::info(icons::CACHE),
        tf!("summary.cache_hits", stats.cache_hits)
    ));
    Logger::plain(format!(
        "  {} {}",
        Colors::info(icons::KEEP),
        tf!("summary.kept", stats.kept)
    ));
    Logger::plain(format!(
        "  {} {}",
        Colors::dim(icons::SKIP),
        tf!("summary.skipped", stats.skipped)
    ));

    // 失败行只在确实有失败时出现
    if stats.failed > 0 {
        Logger::plain(format!(
            "  {} {}",
            Colors::error(icons::ERROR),
            tf!("summary.failed", stats.failed)
        ));
    }

    Logger::plain(format!(
        "  {} {}",
        Colors::dim(icons::FILE),
        tf!("summary.passthrough", stats.passthrough)
    ));
    Logger::plain(format!(
        "  {} {}",
        Colors::dim(icons::TIME),
        tf!("summary.duration", duration.as_millis())
    ));
    Logger::plain("");
}
