// ============================================================================
// LocaleX - 键策略数据模型
// ============================================================================
//
// 文件: src/models/policy.rs
// 职责: 跳过/保留键策略的数据结构和匹配
// 边界:
//   - ✅ 策略列表数据结构定义
//   - ✅ 键名匹配（精确或 glob 模式）
//   - ❌ 不应包含树遍历逻辑
//   - ❌ 不应包含缓存逻辑
//   - ❌ 不应包含 CLI 参数处理
//
// ============================================================================

/// 翻译键策略
///
/// skip 键的子树原样复制；keep 键在已有输出中存在非空值时沿用该值。
/// 两个列表都按键名匹配（与层级无关），条目可以是精确键名或 glob 模式。
#[derive(Debug, Clone, Default)]
pub struct TranslatePolicy {
    skip: Vec<String>,
    keep: Vec<String>,
}

impl TranslatePolicy {
    /// 创建策略
    pub fn new(skip: Vec<String>, keep: Vec<String>) -> Self {
        Self { skip, keep }
    }

    /// 键是否命中跳过列表
    pub fn is_skip(&self, key: &str) -> bool {
        Self::matches(&self.skip, key)
    }

    /// 键是否命中保留列表
    pub fn is_keep(&self, key: &str) -> bool {
        Self::matches(&self.keep, key)
    }

    /// 键名匹配检查
    fn matches(patterns: &[String], key: &str) -> bool {
        for pattern in patterns {
            if pattern == key {
                return true;
            }
            if let Ok(glob_pattern) = glob::Pattern::new(pattern) {
                if glob_pattern.matches(key) {
                    return true;
                }
            }
        }
        false
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let policy = TranslatePolicy::new(vec!["secret_code".to_string()], vec![]);

        assert!(policy.is_skip("secret_code"));
        assert!(!policy.is_skip("secret"));
        assert!(!policy.is_keep("secret_code"));
    }

    #[test]
    fn test_glob_match() {
        let policy = TranslatePolicy::new(
            vec!["id_*".to_string()],
            vec!["legal_?".to_string()],
        );

        assert!(policy.is_skip("id_user"));
        assert!(policy.is_skip("id_"));
        assert!(!policy.is_skip("user_id"));
        assert!(policy.is_keep("legal_a"));
        assert!(!policy.is_keep("legal_ab"));
    }

    #[test]
    fn test_empty_policy_matches_nothing() {
        let policy = TranslatePolicy::default();

        assert!(!policy.is_skip("anything"));
        assert!(!policy.is_keep("anything"));
    }
}
