// ============================================================================
// LocaleX - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量和默认值定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 翻译服务默认参数定义
//   - ✅ 图标字符定义
//   - ✅ 缓存目录等固定路径名定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含计算逻辑
//   - ❌ 不应包含文件路径处理
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "LOCALEX";

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "localex.toml";

/// DeepL 翻译接口默认地址
pub const DEEPL_API_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

/// 鉴权密钥默认环境变量名
pub const AUTH_KEY_ENV: &str = "DEEPL_AUTH_KEY";

/// 持久化缓存目录名（相对运行目录）
pub const CACHE_DIR_NAME: &str = ".cache_locale";

/// 两次接口调用之间的默认间隔（毫秒）
pub const DEFAULT_SLEEP_MS: u64 = 10;

/// 输出文件默认缩进空格数
pub const DEFAULT_INDENT: usize = 2;

/// 目标语言代码长度（两位字母）
pub const LOCALE_CODE_LEN: usize = 2;

/// 像素风格图标
pub mod icons {
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 翻译图标
    pub const TRANSLATE: &str = "▸";
    /// 缓存图标
    pub const CACHE: &str = "●";
    /// 保留图标
    pub const KEEP: &str = "◆";
    /// 跳过图标
    pub const SKIP: &str = "○";
    /// 文件图标
    pub const FILE: &str = "▪";
    /// 箭头图标
    pub const ARROW: &str = "→";
    /// 汇总图标
    pub const SUMMARY: &str = "◈";
    /// 时间图标
    pub const TIME: &str = "⧖";
}
