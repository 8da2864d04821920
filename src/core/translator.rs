// ============================================================================
// LocaleX - 树翻译引擎
// ============================================================================
//
// 文件: src/core/translator.rs
// 职责: 文档树的递归翻译遍历
// 边界:
//   - ✅ 按节点类型的结构化递归
//   - ✅ skip/keep 策略在对象条目上的应用
//   - ✅ 字符串叶子的缓存查询和翻译委派
//   - ✅ 运行统计累计
//   - ❌ 不应包含 HTTP 请求细节
//   - ❌ 不应包含缓存文件读写
//   - ❌ 不应包含输出文件写入
//
// ============================================================================

use serde_json::{Map, Value};
use std::future::Future;
use std::pin::Pin;

use crate::core::cache::TranslationCache;
use crate::core::client::TranslationProvider;
use crate::models::{RunStats, TranslatePolicy};
use crate::tf;
use crate::ui::progress::ProgressReporter;
use crate::utils::logger::Logger;

/// 统计子树中的字符串叶子数（含空字符串）
///
/// 用于进度条总量和 skip/keep 子树的统计归账。
pub fn count_strings(node: &Value) -> usize {
    match node {
        Value::Object(entries) => entries.values().map(count_strings).sum(),
        Value::Array(items) => items.iter().map(count_strings).sum(),
        Value::String(_) => 1,
        _ => 0,
    }
}

/// 树翻译引擎
///
/// 对源文档做结构化递归：对象逐条目、数组逐元素，形状和非字符串叶子
/// 保持不变，只有符合条件的字符串叶子被替换为译文。缓存对象显式传入，
/// 不依赖任何全局可变状态。
pub struct TreeTranslator<'p, P> {
    provider: &'p P,
    policy: TranslatePolicy,
    cache: Option<TranslationCache>,
    progress: Option<ProgressReporter>,
    stats: RunStats,
}

impl<'p, P: TranslationProvider> TreeTranslator<'p, P> {
    /// 创建翻译引擎
    pub fn new(provider: &'p P, policy: TranslatePolicy) -> Self {
        Self {
            provider,
            policy,
            cache: None,
            progress: None,
            stats: RunStats::default(),
        }
    }

    /// 挂载进程缓存
    pub fn with_cache(mut self, cache: TranslationCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// 挂载进度上报
    pub fn with_progress(mut self, progress: ProgressReporter) -> Self {
        self.progress = Some(progress);
        self
    }

    /// 运行统计
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// 取回缓存对象（运行结束后持久化用）
    pub fn take_cache(&mut self) -> Option<TranslationCache> {
        self.cache.take()
    }

    /// 结束并清除进度显示
    pub fn finish_progress(&mut self) {
        if let Some(progress) = self.progress.take() {
            progress.finish();
        }
    }

    /// 翻译整棵文档树
    ///
    /// `existing` 为已有输出文件的文档树（没有时传 Null），keep 策略
    /// 在遍历中与源树同步下潜，在相同位置上取值。
    pub async fn translate_tree(&mut self, source: &Value, existing: &Value) -> Value {
        self.translate_node(source, Some(existing)).await
    }

    /// 按节点类型递归翻译
    ///
    /// 递归经由装箱的 Future 实现（async fn 不能直接自递归）。
    fn translate_node<'a>(
        &'a mut self,
        node: &'a Value,
        existing: Option<&'a Value>,
    ) -> Pin<Box<dyn Future<Output = Value> + 'a>> {
        Box::pin(async move {
            match node {
                Value::Object(entries) => {
                    // 逐条目翻译，保持键顺序
                    let mut result = Map::new();
                    for (key, value) in entries {
                        let translated = self.translate_entry(key, value, existing).await;
                        result.insert(key.clone(), translated);
                    }
                    Value::Object(result)
                }
                Value::Array(items) => {
                    // 逐元素翻译，保持长度和顺序，已有输出按下标对位
                    let mut result = Vec::with_capacity(items.len());
                    for (idx, item) in items.iter().enumerate() {
                        let slot = existing.and_then(|e| e.get(idx));
                        result.push(self.translate_node(item, slot).await);
                    }
                    Value::Array(result)
                }
                Value::String(text) => Value::String(self.translate_leaf(text).await),
                // 数字、布尔、null 原样返回，永远不进翻译客户端
                other => other.clone(),
            }
        })
    }

    /// 对单个对象条目应用 skip/keep 策略
    async fn translate_entry(
        &mut self,
        key: &str,
        value: &Value,
        existing: Option<&Value>,
    ) -> Value {
        // 1. skip: 整棵子树原样复制，即使其中还有字符串
        if self.policy.is_skip(key) {
            tracing::debug!(key, "skip key, copying subtree verbatim");
            let leaves = count_strings(value);
            self.stats.skipped += leaves;
            self.advance(leaves);
            return value.clone();
        }

        // 2. keep: 已有输出同位置存在非 null、非空串的值时直接沿用
        let existing_value = existing.and_then(|e| e.get(key));
        if self.policy.is_keep(key) {
            if let Some(kept) = existing_value {
                if !kept.is_null() && kept.as_str() != Some("") {
                    tracing::debug!(key, "keep key, reusing existing value");
                    let leaves = count_strings(value);
                    self.stats.kept += leaves;
                    self.advance(leaves);
                    return kept.clone();
                }
            }
        }

        // 3. 其余条目正常递归
        self.translate_node(value, existing_value).await
    }

    /// 翻译单个字符串叶子
    async fn translate_leaf(&mut self, text: &str) -> String {
        // 空字符串直接透传，不产生接口调用
        if text.is_empty() {
            self.stats.passthrough += 1;
            self.advance(1);
            return String::new();
        }

        // 进程缓存按源字符串内容命中，绕过限速和网络
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(text) {
                tracing::debug!(source = text, "cache hit");
                let translated = hit.to_string();
                self.stats.cache_hits += 1;
                self.advance(1);
                return translated;
            }
        }

        if let Some(progress) = &self.progress {
            progress.note(text);
        }

        let result = match self.provider.translate(text).await {
            Ok(translated) => {
                self.stats.translated += 1;
                if let Some(cache) = &mut self.cache {
                    cache.insert(text.to_string(), translated.clone());
                }
                translated
            }
            Err(err) => {
                // 单个叶子失败不中断整次运行，降级为保留原文
                Logger::warn(tf!("translate.leaf_failed", text, err));
                self.stats.failed += 1;
                text.to_string()
            }
        };

        self.advance(1);
        result
    }

    /// 推进进度条
    fn advance(&self, leaves: usize) {
        if let Some(progress) = &self.progress {
            progress.inc(leaves as u64);
        }
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{TranslateError, TranslateResult};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// 测试用翻译服务: 固定映射表 + 调用记录
    struct MockProvider {
        replies: HashMap<String, String>,
        fail_on: HashSet<String>,
        calls: RefCell<Vec<String>>,
    }

    impl MockProvider {
        fn new(pairs: &[(&str, &str)]) -> Self {
            Self {
                replies: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                fail_on: HashSet::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing_on(mut self, text: &str) -> Self {
            self.fail_on.insert(text.to_string());
            self
        }

        fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl TranslationProvider for MockProvider {
        async fn translate(&self, text: &str) -> TranslateResult<String> {
            self.calls.borrow_mut().push(text.to_string());
            if self.fail_on.contains(text) {
                return Err(TranslateError::BadStatus(500));
            }
            Ok(self
                .replies
                .get(text)
                .cloned()
                .unwrap_or_else(|| format!("<{}>", text)))
        }
    }

    fn translator<'p>(
        provider: &'p MockProvider,
        skip: &[&str],
        keep: &[&str],
    ) -> TreeTranslator<'p, MockProvider> {
        let policy = TranslatePolicy::new(
            skip.iter().map(|s| s.to_string()).collect(),
            keep.iter().map(|s| s.to_string()).collect(),
        );
        TreeTranslator::new(provider, policy)
    }

    #[tokio::test]
    async fn test_basic_scenario() {
        let provider = MockProvider::new(&[("Hello", "Hola")]);
        let mut engine = translator(&provider, &[], &[]);

        let source = json!({"greeting": "Hello", "count": 3, "flag": true});
        let result = engine.translate_tree(&source, &Value::Null).await;

        assert_eq!(result, json!({"greeting": "Hola", "count": 3, "flag": true}));
        assert_eq!(engine.stats().translated, 1);
    }

    #[tokio::test]
    async fn test_shape_and_order_preserved() {
        let provider = MockProvider::new(&[]);
        let mut engine = translator(&provider, &[], &[]);

        let source = json!({
            "zeta": {"b": "one", "a": ["two", 4, null]},
            "alpha": false,
            "items": ["three", {"x": "four"}]
        });
        let result = engine.translate_tree(&source, &Value::Null).await;

        // 键顺序、数组长度、非字符串叶子全部保持
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "items"]);
        assert_eq!(result["zeta"]["a"].as_array().unwrap().len(), 3);
        assert_eq!(result["zeta"]["a"][1], json!(4));
        assert_eq!(result["zeta"]["a"][2], Value::Null);
        assert_eq!(result["alpha"], json!(false));
        assert_eq!(result["items"][0], json!("<three>"));
        assert_eq!(result["items"][1]["x"], json!("<four>"));
    }

    #[tokio::test]
    async fn test_null_and_numbers_never_reach_provider() {
        let provider = MockProvider::new(&[]);
        let mut engine = translator(&provider, &[], &[]);

        let source = json!({"a": null, "b": 42, "c": 1.5, "d": true});
        let result = engine.translate_tree(&source, &Value::Null).await;

        assert_eq!(result, source);
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_string_identity() {
        let provider = MockProvider::new(&[]);
        let mut engine = translator(&provider, &[], &[]);

        let source = json!({"blank": ""});
        let result = engine.translate_tree(&source, &Value::Null).await;

        assert_eq!(result["blank"], json!(""));
        assert_eq!(provider.call_count(), 0);
        assert_eq!(engine.stats().passthrough, 1);
    }

    #[tokio::test]
    async fn test_skip_precedence() {
        let provider = MockProvider::new(&[("World", "Mundo")]);
        let mut engine = translator(&provider, &["secret_code"], &[]);

        let source = json!({"secret_code": "XJ-42", "name": "World"});
        let result = engine.translate_tree(&source, &Value::Null).await;

        assert_eq!(result["secret_code"], json!("XJ-42"));
        assert_eq!(result["name"], json!("Mundo"));
        assert_eq!(engine.stats().skipped, 1);
    }

    #[tokio::test]
    async fn test_skip_covers_nested_subtree() {
        let provider = MockProvider::new(&[]);
        let mut engine = translator(&provider, &["meta"], &[]);

        let source = json!({"meta": {"build": "abc", "tags": ["x", "y"]}, "title": "Hi"});
        let result = engine.translate_tree(&source, &Value::Null).await;

        assert_eq!(result["meta"], source["meta"]);
        assert_eq!(result["title"], json!("<Hi>"));
        // 子树里 3 个字符串都没有触发调用
        assert_eq!(provider.call_count(), 1);
        assert_eq!(engine.stats().skipped, 3);
    }

    #[tokio::test]
    async fn test_skip_beats_keep_and_cache() {
        let provider = MockProvider::new(&[]);
        let policy = TranslatePolicy::new(vec!["name".to_string()], vec!["name".to_string()]);
        let dir = tempfile::tempdir().unwrap();
        let mut cache = TranslationCache::for_locale(dir.path(), "es").unwrap();
        cache.insert("World".to_string(), "Mundo".to_string());

        let mut engine = TreeTranslator::new(&provider, policy).with_cache(cache);

        let source = json!({"name": "World"});
        let existing = json!({"name": "Mundo viejo"});
        let result = engine.translate_tree(&source, &existing).await;

        // skip 优先于 keep 和缓存，原文原样保留
        assert_eq!(result["name"], json!("World"));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_keep_precedence_zero_calls() {
        let provider = MockProvider::new(&[]);
        let mut engine = translator(&provider, &[], &["name"]);

        let source = json!({"name": "World"});
        let existing = json!({"name": "Mundo"});
        let result = engine.translate_tree(&source, &existing).await;

        assert_eq!(result["name"], json!("Mundo"));
        assert_eq!(provider.call_count(), 0);
        assert_eq!(engine.stats().kept, 1);
    }

    #[tokio::test]
    async fn test_keep_ignores_null_and_empty_existing() {
        let provider = MockProvider::new(&[("World", "Mundo")]);
        let mut engine = translator(&provider, &[], &["a", "b", "c"]);

        let source = json!({"a": "World", "b": "World", "c": "World"});
        let existing = json!({"a": null, "b": ""});
        let result = engine.translate_tree(&source, &existing).await;

        // null、空串、缺失三种情况都回退到正常翻译
        assert_eq!(result, json!({"a": "Mundo", "b": "Mundo", "c": "Mundo"}));
        assert_eq!(engine.stats().kept, 0);
    }

    #[tokio::test]
    async fn test_keep_matches_nested_position() {
        let provider = MockProvider::new(&[]);
        let mut engine = translator(&provider, &[], &["title"]);

        let source = json!({"menu": {"title": "Menu", "hint": "Open"}});
        let existing = json!({"menu": {"title": "Menú"}});
        let result = engine.translate_tree(&source, &existing).await;

        assert_eq!(result["menu"]["title"], json!("Menú"));
        assert_eq!(result["menu"]["hint"], json!("<Open>"));
    }

    #[tokio::test]
    async fn test_cache_hit_bypasses_provider() {
        let provider = MockProvider::new(&[]);
        let dir = tempfile::tempdir().unwrap();
        let mut cache = TranslationCache::for_locale(dir.path(), "es").unwrap();
        cache.insert("Hello".to_string(), "Hola".to_string());

        let mut engine = translator(&provider, &[], &[]).with_cache(cache);

        let source = json!({"greeting": "Hello", "salute": "Hello"});
        let result = engine.translate_tree(&source, &Value::Null).await;

        // 不同键下的相同文本共享同一条缓存
        assert_eq!(result, json!({"greeting": "Hola", "salute": "Hola"}));
        assert_eq!(provider.call_count(), 0);
        assert_eq!(engine.stats().cache_hits, 2);
    }

    #[tokio::test]
    async fn test_repeated_string_translated_once() {
        let provider = MockProvider::new(&[("Hello", "Hola")]);
        let dir = tempfile::tempdir().unwrap();
        let cache = TranslationCache::for_locale(dir.path(), "es").unwrap();

        let mut engine = translator(&provider, &[], &[]).with_cache(cache);

        let source = json!({"a": "Hello", "b": "Hello", "c": "Hello"});
        let result = engine.translate_tree(&source, &Value::Null).await;

        // 首次调用后写入缓存，其余命中
        assert_eq!(result, json!({"a": "Hola", "b": "Hola", "c": "Hola"}));
        assert_eq!(provider.call_count(), 1);
        assert_eq!(engine.stats().translated, 1);
        assert_eq!(engine.stats().cache_hits, 2);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_source_text() {
        let provider = MockProvider::new(&[("World", "Mundo")]).failing_on("Hello");
        let mut engine = translator(&provider, &[], &[]);

        let source = json!({"greeting": "Hello", "name": "World"});
        let result = engine.translate_tree(&source, &Value::Null).await;

        // 失败的叶子保留原文，遍历继续
        assert_eq!(result, json!({"greeting": "Hello", "name": "Mundo"}));
        assert_eq!(engine.stats().failed, 1);
        assert_eq!(engine.stats().translated, 1);
    }

    #[tokio::test]
    async fn test_failed_leaf_not_cached() {
        let provider = MockProvider::new(&[]).failing_on("Hello");
        let dir = tempfile::tempdir().unwrap();
        let cache = TranslationCache::for_locale(dir.path(), "es").unwrap();

        let mut engine = translator(&provider, &[], &[]).with_cache(cache);
        let source = json!({"a": "Hello"});
        engine.translate_tree(&source, &Value::Null).await;

        let cache = engine.take_cache().unwrap();
        assert_eq!(cache.get("Hello"), None);
    }

    #[tokio::test]
    async fn test_idempotent_rerun_with_keep_all() {
        let provider = MockProvider::new(&[("Hello", "Hola"), ("World", "Mundo")]);

        // 第一次运行
        let mut first = translator(&provider, &[], &[]);
        let source = json!({"greeting": "Hello", "name": "World", "count": 3});
        let output = first.translate_tree(&source, &Value::Null).await;
        let first_calls = provider.call_count();

        // 第二次运行: keep 覆盖全部顶层键，existing 为上次输出
        let mut second = translator(&provider, &[], &["greeting", "name", "count"]);
        let rerun = second.translate_tree(&source, &output).await;

        let before = crate::core::output::to_json_string(&output, 2).unwrap();
        let after = crate::core::output::to_json_string(&rerun, 2).unwrap();
        assert_eq!(before, after);
        assert_eq!(provider.call_count(), first_calls);
    }

    #[test]
    fn test_count_strings() {
        let tree = json!({
            "a": "one",
            "b": {"c": ["two", "", 5], "d": null},
            "e": true
        });

        assert_eq!(count_strings(&tree), 3);
    }
}
