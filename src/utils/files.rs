// ============================================================================
// LocaleX - 文件定位工具
// ============================================================================
//
// 文件: src/utils/files.rs
// 职责: 翻译源文件定位和输出路径解析
// 边界:
//   - ✅ 目录内 .json 文件枚举
//   - ✅ 源文件交互式选择
//   - ✅ 输出文件路径计算和覆盖确认
//   - ❌ 不应包含 JSON 内容解析
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含配置管理
//
// ============================================================================

use anyhow::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::logger::Logger;
use crate::utils::prompt;
use crate::{t, tf};

/// 枚举目录下的 .json 文件（不递归子目录），按文件名排序
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let json_name = Regex::new(r"\.json$")?;

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| json_name.is_match(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}

/// 解析翻译源文件
///
/// 传入目录时枚举其中的 .json 文件：没有则报错退出，恰好一个直接使用，
/// 多个时交互式编号选择。传入文件时要求存在且以 .json 结尾。
pub fn resolve_input_file(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        let mut files = find_json_files(path)?;

        match files.len() {
            0 => anyhow::bail!(tf!("files.none_found", path.display())),
            1 => return Ok(files.remove(0)),
            _ => {}
        }

        Logger::info(t!("files.choose_source"));
        for (idx, file) in files.iter().enumerate() {
            Logger::plain(format!(
                "  [{}] {}",
                idx,
                file.file_name().unwrap_or_default().to_string_lossy()
            ));
        }

        let idx = prompt::select_index(t!("files.type_number"), files.len())?;
        return Ok(files[idx].clone());
    }

    if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
        anyhow::bail!(t!("files.not_json"));
    }
    if !path.is_file() {
        anyhow::bail!(tf!("files.not_found", path.display()));
    }

    Ok(path.to_path_buf())
}

/// 为文件名补全 .json 后缀
pub fn ensure_json_ext(name: &str) -> String {
    if name.ends_with(".json") {
        name.to_string()
    } else {
        format!("{}.json", name)
    }
}

/// 计算输出文件路径
///
/// 未指定输出名时默认 `<语言代码>.json`，强制 .json 后缀，放在源文件同目录。
/// 开启覆盖确认且目标已存在时询问用户；拒绝则改为输入新文件名。
pub fn resolve_output_path(
    output: Option<&str>,
    lang_code: &str,
    input_file: &Path,
    confirm_overwrite: bool,
) -> Result<PathBuf> {
    let base_dir = input_file.parent().unwrap_or_else(|| Path::new("."));

    let output_name = match output {
        Some(name) => ensure_json_ext(name),
        None => format!("{}.json", lang_code),
    };
    let output_file = base_dir.join(&output_name);

    if confirm_overwrite && output_file.exists() {
        let overwrite = prompt::confirm(tf!("files.exists_prompt", output_name))?;
        if !overwrite {
            let new_name = prompt::input_line(t!("files.new_name_prompt"))?;
            return Ok(base_dir.join(ensure_json_ext(&new_name)));
        }
    }

    Ok(output_file)
}

/// 源文件主名（不含扩展名），用于目标语言一致性检查
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default()
}

// ============================================================================
// 测试
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_find_json_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zh.json"), "{}").unwrap();
        fs::write(dir.path().join("en.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/fr.json"), "{}").unwrap();

        let files = find_json_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        // 子目录不参与枚举，结果按文件名排序
        assert_eq!(names, vec!["en.json", "zh.json"]);
    }

    #[test]
    fn test_resolve_input_file_rejects_non_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("strings.yaml");
        fs::write(&file, "a: b").unwrap();

        assert!(resolve_input_file(&file).is_err());
    }

    #[test]
    fn test_resolve_input_file_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing.json");

        assert!(resolve_input_file(&file).is_err());
    }

    #[test]
    fn test_resolve_input_file_single_file_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("en.json");
        fs::write(&file, "{}").unwrap();

        let resolved = resolve_input_file(dir.path()).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_ensure_json_ext() {
        assert_eq!(ensure_json_ext("es"), "es.json");
        assert_eq!(ensure_json_ext("es.json"), "es.json");
    }

    #[test]
    fn test_resolve_output_path_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("en.json");
        fs::write(&input, "{}").unwrap();

        let out = resolve_output_path(None, "es", &input, false).unwrap();
        assert_eq!(out, dir.path().join("es.json"));

        let named = resolve_output_path(Some("mx"), "es", &input, false).unwrap();
        assert_eq!(named, dir.path().join("mx.json"));
    }
}
