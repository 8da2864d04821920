// ============================================================================
// LocaleX - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置验证和默认值
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含配置应用逻辑
//   - ❌ 不应包含翻译业务逻辑
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含文件系统底层操作
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::utils::constants;

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// LocaleX 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 翻译接口配置
    #[serde(default)]
    pub api: ApiConfig,
    /// 翻译行为配置
    #[serde(default)]
    pub translation: TranslationConfig,
    /// 缓存配置
    #[serde(default)]
    pub cache: CacheConfig,
    /// 键策略配置
    #[serde(default)]
    pub policy: PolicyConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 翻译接口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 接口地址
    #[serde(default)]
    pub endpoint: String,
    /// 鉴权密钥所在的环境变量名
    #[serde(default)]
    pub auth_key_env: String,
}

/// 翻译行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// 两次接口调用之间的间隔（毫秒）
    #[serde(default)]
    pub sleep_ms: u64,
    /// 输出文件缩进空格数
    #[serde(default)]
    pub indent: usize,
}

/// 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 是否启用持久化缓存
    #[serde(default)]
    pub enabled: bool,
    /// 缓存目录（相对运行目录）
    #[serde(default)]
    pub dir: String,
}

/// 键策略配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// 跳过翻译的键（原样复制，支持 glob 模式）
    #[serde(default)]
    pub skip: Vec<String>,
    /// 沿用已有输出的键（支持 glob 模式）
    #[serde(default)]
    pub keep: Vec<String>,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否显示进度条
    #[serde(default)]
    pub show_progress: bool,
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default)]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default)]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub show_progress: Option<bool>,
    pub language: Option<String>,
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认接口地址
    fn default_endpoint() -> String {
        constants::DEEPL_API_ENDPOINT.to_string()
    }

    /// 获取默认鉴权环境变量名
    fn default_auth_key_env() -> String {
        constants::AUTH_KEY_ENV.to_string()
    }

    /// 获取默认调用间隔
    fn default_sleep_ms() -> u64 {
        constants::DEFAULT_SLEEP_MS
    }

    /// 获取默认缩进
    fn default_indent() -> usize {
        constants::DEFAULT_INDENT
    }

    /// 获取默认缓存开关
    fn default_cache_enabled() -> bool {
        true
    }

    /// 获取默认缓存目录
    fn default_cache_dir() -> String {
        constants::CACHE_DIR_NAME.to_string()
    }

    /// 获取默认是否显示进度条
    fn default_show_progress() -> bool {
        true
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_config()?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    fn load_config() -> anyhow::Result<Self> {
        let config_path = PathBuf::from(constants::CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // 配置文件不存在时使用默认配置
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        // 合并参数
        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            config.output.colored = colored;
        }
        if let Some(show_progress) = args.show_progress {
            config.output.show_progress = show_progress;
        }
        if let Some(language) = args.language {
            config.i18n.language = language;
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &PathBuf) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 生成默认配置模板
    pub fn generate_default_template() -> Self {
        let mut config = Self::default();

        // 给模板带上常见的策略示例
        config.policy = PolicyConfig {
            skip: vec!["id".to_string(), "version".to_string()],
            keep: Vec::new(),
        };

        config
    }

    /// 生成默认配置模板并保存到文件
    pub fn create_default_config_file(config_path: &PathBuf) -> anyhow::Result<()> {
        let default_config = Self::generate_default_template();
        default_config.save_to_file(config_path)?;
        Ok(())
    }

    /// 读取全局配置的辅助函数
    fn with_config<T>(reader: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(reader(&config))
    }

    /// 获取接口地址
    pub fn get_api_endpoint() -> String {
        Self::with_config(|c| c.api.endpoint.clone()).unwrap_or_else(|_| Self::default_endpoint())
    }

    /// 获取鉴权环境变量名
    pub fn get_auth_key_env() -> String {
        Self::with_config(|c| c.api.auth_key_env.clone())
            .unwrap_or_else(|_| Self::default_auth_key_env())
    }

    /// 获取接口调用间隔（毫秒）
    pub fn get_sleep_ms() -> u64 {
        Self::with_config(|c| c.translation.sleep_ms).unwrap_or_else(|_| Self::default_sleep_ms())
    }

    /// 获取输出缩进
    pub fn get_indent() -> usize {
        Self::with_config(|c| c.translation.indent).unwrap_or_else(|_| Self::default_indent())
    }

    /// 获取缓存开关
    pub fn get_cache_enabled() -> bool {
        Self::with_config(|c| c.cache.enabled).unwrap_or_else(|_| Self::default_cache_enabled())
    }

    /// 获取缓存目录
    pub fn get_cache_dir() -> PathBuf {
        let dir =
            Self::with_config(|c| c.cache.dir.clone()).unwrap_or_else(|_| Self::default_cache_dir());
        PathBuf::from(dir)
    }

    /// 获取配置文件中的跳过键列表
    pub fn get_skip_keys() -> Vec<String> {
        Self::with_config(|c| c.policy.skip.clone()).unwrap_or_default()
    }

    /// 获取配置文件中的保留键列表
    pub fn get_keep_keys() -> Vec<String> {
        Self::with_config(|c| c.policy.keep.clone()).unwrap_or_default()
    }

    /// 获取是否显示进度条
    pub fn get_show_progress() -> bool {
        Self::with_config(|c| c.output.show_progress)
            .unwrap_or_else(|_| Self::default_show_progress())
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        Self::with_config(|c| c.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// 获取是否彩色输出
    pub fn get_colored() -> bool {
        Self::with_config(|c| c.output.colored).unwrap_or_else(|_| Self::default_colored())
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        Self::with_config(|c| c.i18n.language.clone())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            translation: TranslationConfig::default(),
            cache: CacheConfig::default(),
            policy: PolicyConfig::default(),
            output: OutputConfig::default(),
            i18n: I18nConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: Config::default_endpoint(),
            auth_key_env: Config::default_auth_key_env(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            sleep_ms: Config::default_sleep_ms(),
            indent: Config::default_indent(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: Config::default_cache_enabled(),
            dir: Config::default_cache_dir(),
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            skip: Vec::new(),
            keep: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_progress: Config::default_show_progress(),
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();

        assert_eq!(config.api.endpoint, constants::DEEPL_API_ENDPOINT);
        assert_eq!(config.api.auth_key_env, constants::AUTH_KEY_ENV);
        assert_eq!(config.translation.sleep_ms, constants::DEFAULT_SLEEP_MS);
        assert_eq!(config.translation.indent, constants::DEFAULT_INDENT);
        assert!(config.cache.enabled);
        assert_eq!(config.cache.dir, constants::CACHE_DIR_NAME);
        assert!(config.policy.skip.is_empty());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::generate_default_template();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();

        assert_eq!(parsed.policy.skip, config.policy.skip);
        assert_eq!(parsed.api.endpoint, config.api.endpoint);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [translation]
            sleep_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(parsed.translation.sleep_ms, 250);
        // 未写的字段落到 serde 默认值，而不是报错
        assert_eq!(parsed.translation.indent, 0);
        assert_eq!(parsed.api.endpoint, constants::DEEPL_API_ENDPOINT);
    }
}
