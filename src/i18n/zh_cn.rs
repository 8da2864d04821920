// ============================================================================
// LocaleX - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 交互提示相关
    ("prompt.yes_no", "[Y/N]"),
    ("prompt.invalid_selection", "无效的选择: {}"),
    // 源文件定位相关
    ("files.none_found", "目录 {} 下没有找到 .json 文件"),
    ("files.choose_source", "请选择作为翻译源的文件:"),
    ("files.type_number", "输入文件编号"),
    (
        "files.not_json",
        "必须选择 .json 文件或包含 .json 文件的目录",
    ),
    ("files.not_found", "文件不存在: {}"),
    ("files.exists_prompt", "文件 {} 已存在，是否覆盖？"),
    ("files.new_name_prompt", "请输入新的文件名"),
    // 目标语言相关
    ("locale.prompt", "目标语言代码（两位字母）"),
    ("locale.same_language", "目标语言与源文件语言相同！"),
    // 翻译命令相关
    ("translate.start", "正在将 {} 翻译为 '{}'..."),
    (
        "translate.cache_seeded",
        "已预热 {} 条缓存（来自 {}）",
    ),
    ("translate.cache_invalidated", "按要求失效了 {} 条缓存"),
    ("translate.cache_disabled", "本次运行已禁用翻译缓存"),
    ("translate.leaf_failed", "{}  ->  错误 ({})"),
    (
        "translate.multi_candidates",
        "({}) 返回了多个翻译候选，使用第一个",
    ),
    ("translate.saved", "结果已保存到 {}"),
    ("translate.cache_persisted", "缓存文件已更新: {}"),
    // 错误信息
    ("error.read_source", "读取源文件失败: {}"),
    ("error.parse_source", "解析源文件失败: {}"),
    ("error.parse_existing", "解析已有输出文件失败: {}"),
    ("error.parse_cache", "解析缓存文件失败: {}"),
    (
        "error.cache_not_object",
        "缓存文件不是扁平的字符串映射: {}",
    ),
    (
        "error.missing_auth_key",
        "环境变量 {} 未设置（请检查环境或 .env 文件）",
    ),
    ("error.write_output", "写入输出文件失败: {}"),
    ("error.write_cache", "写入缓存文件失败: {}"),
    // 汇总相关
    ("summary.title", "翻译汇总"),
    ("summary.translated", "接口翻译: {}"),
    ("summary.cache_hits", "缓存命中: {}"),
    ("summary.kept", "沿用已有输出: {}"),
    ("summary.skipped", "跳过的键: {}"),
    ("summary.failed", "失败（保留原文）: {}"),
    ("summary.passthrough", "原样透传: {}"),
    ("summary.duration", "耗时 {}ms"),
    // 初始化相关
    ("init.start", "正在初始化 LocaleX 配置..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已有配置文件"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.create_failed", "创建配置文件失败: {}"),
    ("init.next_steps", "现在可以按项目需要编辑配置文件"),
    // 缓存命令相关
    ("cache.show_title", "语言 '{}' 的缓存条目（共 {} 条）:"),
    ("cache.empty", "语言 '{}' 没有缓存文件"),
    ("cache.cleared", "已删除缓存文件: {}"),
    ("cache.cleared_all", "已删除 {} 个缓存文件"),
    ("cache.dir_missing", "缓存目录不存在"),
];
