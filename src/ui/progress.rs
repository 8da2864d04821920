// ============================================================================
// LocaleX - 进度显示组件
// ============================================================================
//
// 文件: src/ui/progress.rs
// 职责: 翻译进度条显示
// 边界:
//   - ✅ 进度条创建和样式
//   - ✅ 进度推进和当前文本提示
//   - ✅ 结束清理
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含统计计算
//   - ❌ 不应包含文件操作
//
// ============================================================================

use indicatif::{ProgressBar, ProgressStyle};

/// 进度提示中显示的文本最大长度
const NOTE_MAX_CHARS: usize = 32;

/// 翻译进度上报器
///
/// 以源文档的字符串叶子总数为进度总量，绘制到 stderr，
/// 不会和 stdout 的日志输出混在一起。
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// 创建进度条
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(
                "{spinner:.cyan} [{bar:30.cyan/white}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█░ "),
        );
        Self { bar }
    }

    /// 推进进度
    pub fn inc(&self, leaves: u64) {
        self.bar.inc(leaves);
    }

    /// 提示当前正在翻译的文本（过长时截断）
    pub fn note(&self, text: &str) {
        let short: String = text.chars().take(NOTE_MAX_CHARS).collect();
        if short.len() < text.len() {
            self.bar.set_message(format!("{}…", short));
        } else {
            self.bar.set_message(short);
        }
    }

    /// 结束并清除进度条
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
