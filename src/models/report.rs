// ============================================================================
// LocaleX - 运行统计数据模型
// ============================================================================
//
// 文件: src/models/report.rs
// 职责: 翻译运行统计数据结构定义
// 边界:
//   - ✅ 按叶子结果分类的计数器定义
//   - ✅ 统计聚合计算
//   - ❌ 不应包含统计渲染逻辑
//   - ❌ 不应包含翻译逻辑
//
// ============================================================================

/// 单次翻译运行的统计信息
///
/// 计数均以源文档中的字符串叶子为单位。
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// 通过接口翻译成功的叶子数
    pub translated: usize,
    /// 进程缓存命中的叶子数
    pub cache_hits: usize,
    /// 因 keep 策略沿用已有输出的叶子数
    pub kept: usize,
    /// 因 skip 策略原样复制的叶子数
    pub skipped: usize,
    /// 接口调用失败、保留原文的叶子数
    pub failed: usize,
    /// 空字符串等原样透传的叶子数
    pub passthrough: usize,
}

impl RunStats {
    /// 处理过的字符串叶子总数
    pub fn total(&self) -> usize {
        self.translated + self.cache_hits + self.kept + self.skipped + self.failed + self.passthrough
    }

    /// 实际发起的接口调用次数（成功 + 失败）
    pub fn api_calls(&self) -> usize {
        self.translated + self.failed
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals() {
        let stats = RunStats {
            translated: 3,
            cache_hits: 2,
            kept: 1,
            skipped: 4,
            failed: 1,
            passthrough: 2,
        };

        assert_eq!(stats.total(), 13);
        assert_eq!(stats.api_calls(), 4);
    }
}
