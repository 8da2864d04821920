// ============================================================================
// LocaleX - 翻译缓存
// ============================================================================
//
// 文件: src/core/cache.rs
// 职责: 进程内翻译缓存和按语言的持久化缓存文件
// 边界:
//   - ✅ 源字符串到译文的进程内映射
//   - ✅ 持久化缓存文件的装载和整体重写
//   - ✅ 指定条目的失效处理
//   - ❌ 不应包含树遍历逻辑
//   - ❌ 不应包含翻译接口调用
//   - ❌ 不应包含输出文件写入
//
// ============================================================================

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::tf;

/// 翻译缓存
///
/// 键严格使用源字符串内容，与文档键名无关：不同键下的相同文本共享
/// 一条缓存，相同键下的不同文本互不影响。条目只增不改。
#[derive(Debug)]
pub struct TranslationCache {
    entries: BTreeMap<String, String>,
    path: PathBuf,
    seeded: usize,
}

impl TranslationCache {
    /// 装载指定语言的持久化缓存
    ///
    /// 缓存文件不存在时返回空缓存；文件损坏时报错中止。
    pub fn for_locale(cache_dir: &Path, locale: &str) -> Result<Self> {
        let path = cache_dir.join(format!("{}.json", locale));

        let entries = if path.is_file() {
            Self::read_entries(&path)?
        } else {
            BTreeMap::new()
        };

        let seeded = entries.len();
        tracing::debug!(locale, seeded, "translation cache loaded");

        Ok(Self {
            entries,
            path,
            seeded,
        })
    }

    /// 读取缓存文件为扁平的字符串映射
    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        let content = fs::read_to_string(path)
            .with_context(|| tf!("error.parse_cache", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| tf!("error.parse_cache", path.display()))?;

        let object = value
            .as_object()
            .ok_or_else(|| anyhow::anyhow!(tf!("error.cache_not_object", path.display())))?;

        let mut entries = BTreeMap::new();
        for (source, translated) in object {
            let text = translated
                .as_str()
                .ok_or_else(|| anyhow::anyhow!(tf!("error.cache_not_object", path.display())))?;
            entries.insert(source.clone(), text.to_string());
        }

        Ok(entries)
    }

    /// 失效指定源字符串的缓存条目，返回实际删除数
    pub fn invalidate(&mut self, sources: &[String]) -> usize {
        let mut dropped = 0;
        for source in sources {
            if self.entries.remove(source).is_some() {
                dropped += 1;
            }
        }
        dropped
    }

    /// 按源字符串查询译文
    pub fn get(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    /// 写入新条目，已有条目不会被覆盖
    pub fn insert(&mut self, source: String, translated: String) {
        self.entries.entry(source).or_insert(translated);
    }

    /// 缓存条目数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 缓存是否为空
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 装载时的预热条目数
    pub fn seeded(&self) -> usize {
        self.seeded
    }

    /// 缓存文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 遍历缓存条目（按源字符串有序）
    pub fn entries(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// 运行结束时把缓存整体重写到文件
    pub fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| tf!("error.write_cache", self.path.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .with_context(|| tf!("error.write_cache", self.path.display()))?;
        fs::write(&self.path, content)
            .with_context(|| tf!("error.write_cache", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "cache persisted");
        Ok(())
    }
}

// ============================================================================
// 测试
// ============================================================================
