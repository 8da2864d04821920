// ============================================================================
// LocaleX - 翻译客户端
// ============================================================================
//
// 文件: src/core/client.rs
// 职责: DeepL 翻译接口封装
// 边界:
//   - ✅ 单条文本的翻译请求和响应解析
//   - ✅ 调用间隔限速（每次真实调用前等待）
//   - ✅ 响应候选处理和文本解码
//   - ❌ 不应包含树遍历逻辑
//   - ❌ 不应包含缓存逻辑
//   - ❌ 不应包含重试逻辑（按设计不重试）
//
// ============================================================================

use serde::Deserialize;
use std::time::Duration;

use crate::core::error::{TranslateError, TranslateResult};
use crate::models::config::Config;
use crate::tf;
use crate::utils::logger::Logger;

/// 翻译服务抽象
///
/// 每次调用翻译一个非空字符串叶子。实现方负责限速。
#[allow(async_fn_in_trait)]
pub trait TranslationProvider {
    /// 翻译文本，失败时由调用方降级为保留原文
    async fn translate(&self, text: &str) -> TranslateResult<String>;
}

/// DeepL 接口响应
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Option<Vec<TranslationCandidate>>,
}

/// 单个翻译候选
#[derive(Debug, Deserialize)]
struct TranslationCandidate {
    text: String,
}

/// DeepL 翻译客户端
///
/// 测试方式: $ curl https://api-free.deepl.com/v2/translate \
///     -d auth_key=YOUR-API-KEY -d "text=Hello, world!" -d "target_lang=ES"
pub struct DeepLClient {
    http: reqwest::Client,
    endpoint: String,
    auth_key: String,
    target_lang: String,
    delay: Duration,
}

impl DeepLClient {
    /// 创建客户端，目标语言代码按接口要求转为大写
    pub fn new(auth_key: String, target_locale: &str, delay: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: Config::get_api_endpoint(),
            auth_key,
            target_lang: target_locale.to_uppercase(),
            delay,
        }
    }

    /// 把候选文本解码为纯文本
    ///
    /// preserve_formatting=1 时接口返回的已是纯文本，这里只收敛所有权。
    fn decode_text(text: &str) -> String {
        text.to_string()
    }
}

impl TranslationProvider for DeepLClient {
    async fn translate(&self, text: &str) -> TranslateResult<String> {
        // 限速: 每次真实调用前固定等待，包括第一次
        tokio::time::sleep(self.delay).await;

        let params = [
            ("target_lang", self.target_lang.as_str()),
            ("auth_key", self.auth_key.as_str()),
            ("text", text),
            ("preserve_formatting", "1"),
        ];

        let response = self.http.post(&self.endpoint).form(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::BadStatus(status.as_u16()));
        }

        let body: TranslateResponse = response.json().await?;
        let candidates = body.translations.ok_or(TranslateError::EmptyResponse)?;

        let first = match candidates.first() {
            Some(candidate) => candidate,
            None => return Err(TranslateError::EmptyResponse),
        };

        if candidates.len() > 1 {
            Logger::warn(tf!("translate.multi_candidates", text));
        }

        tracing::debug!(source = text, translated = %first.text, "translated via API");
        Ok(Self::decode_text(&first.text))
    }
}
