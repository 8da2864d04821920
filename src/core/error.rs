// ============================================================================
// LocaleX - 翻译错误定义
// ============================================================================
//
// 文件: src/core/error.rs
// 职责: 叶子级翻译失败的错误类型定义
// 边界:
//   - ✅ 翻译客户端错误类型定义
//   - ✅ 错误信息格式化
//   - ❌ 不应包含错误恢复逻辑
//   - ❌ 不应包含致命错误处理（致命路径走 anyhow）
//
// ============================================================================

use thiserror::Error;

/// 翻译客户端的失败类型
///
/// 这些错误只影响单个叶子字符串，调用方会降级为保留原文继续运行。
#[derive(Error, Debug)]
pub enum TranslateError {
    /// 网络传输失败
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 非 2xx 响应
    #[error("response status {0}")]
    BadStatus(u16),

    /// 响应缺少 translations 字段或没有任何候选
    #[error("response has no translations")]
    EmptyResponse,
}

/// 错误结果类型别名
pub type TranslateResult<T> = Result<T, TranslateError>;
