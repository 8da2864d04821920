// ============================================================================
// LocaleX - Core 核心模块
// ============================================================================
//
// 文件: src/core/mod.rs
// 职责: 核心业务逻辑模块入口和导出
// 边界:
//   - ✅ 核心子模块导出
//   - ✅ 常用类型重新导出
//   - ❌ 不应包含具体业务实现
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 相关逻辑
//
// ============================================================================

pub mod cache;
pub mod client;
pub mod error;
pub mod output;
pub mod translator;

// 重新导出常用类型
pub use cache::TranslationCache;
pub use client::{DeepLClient, TranslationProvider};
pub use error::{TranslateError, TranslateResult};
pub use translator::{count_strings, TreeTranslator};
