// ============================================================================
// LocaleX - 输出文件处理
// ============================================================================
//
// 文件: src/core/output.rs
// 职责: 已有输出文件装载和结果文件写出
// 边界:
//   - ✅ keep 策略数据源（已有输出文件）装载
//   - ✅ 结果树按配置缩进序列化和写出
//   - ❌ 不应包含输出路径计算（见 utils/files.rs）
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含缓存管理
//
// ============================================================================

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::tf;

/// 装载已有输出文件，作为 keep 策略的数据源
///
/// 文件不存在等同于空映射（返回 Null）；文件损坏则报错中止。
pub fn load_existing(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Ok(Value::Null);
    }

    let content =
        fs::read_to_string(path).with_context(|| tf!("error.parse_existing", path.display()))?;
    let value = serde_json::from_str(&content)
        .with_context(|| tf!("error.parse_existing", path.display()))?;

    Ok(value)
}

/// 按指定缩进序列化文档树
///
/// 非 ASCII 字符原样输出，不做 \u 转义。
pub fn to_json_string(tree: &Value, indent: usize) -> Result<String> {
    let indent_bytes = vec![b' '; indent];
    let formatter = PrettyFormatter::with_indent(&indent_bytes);

    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    tree.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}

/// 写出结果文件
pub fn save_output(tree: &Value, path: &Path, indent: usize) -> Result<()> {
    let content = to_json_string(tree, indent)?;
    fs::write(path, content).with_context(|| tf!("error.write_output", path.display()))?;
    Ok(())
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_existing_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let value = load_existing(&dir.path().join("es.json")).unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_load_existing_malformed_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("es.json");
        fs::write(&path, "{ broken").unwrap();

        assert!(load_existing(&path).is_err());
    }

    #[test]
    fn test_save_preserves_key_order_and_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("es.json");

        let tree = json!({"zeta": "Hólá", "alpha": "世界", "count": 3});
        save_output(&tree, &path, 2).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // 键按插入顺序输出，非 ASCII 原样保留
        assert!(content.find("zeta").unwrap() < content.find("alpha").unwrap());
        assert!(content.contains("Hólá"));
        assert!(content.contains("世界"));
        assert!(!content.contains("\\u"));

        let reloaded = load_existing(&path).unwrap();
        assert_eq!(reloaded, tree);
    }

    #[test]
    fn test_indent_width_is_configurable() {
        let tree = json!({"a": 1});

        let four = to_json_string(&tree, 4).unwrap();
        assert!(four.contains("\n    \"a\""));

        let zero = to_json_string(&tree, 0).unwrap();
        assert!(zero.contains("\n\"a\""));
    }
}
