// ============================================================================
// LocaleX - 交互输入工具
// ============================================================================
//
// 文件: src/utils/prompt.rs
// 职责: 终端交互式输入
// 边界:
//   - ✅ 确认提示（Y/N）
//   - ✅ 单行文本输入
//   - ✅ 编号选择输入
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含输入内容校验之外的处理
//
// ============================================================================

use anyhow::Result;
use std::io::{self, Write};

use crate::utils::logger::Logger;
use crate::{t, tf};

/// 确认提示，回车前等待用户输入 Y/N
pub fn confirm<S: AsRef<str>>(message: S) -> Result<bool> {
    print!("{} {} ", message.as_ref(), t!("prompt.yes_no"));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes" || input == "是" || input == "确认")
}

/// 单行文本输入
pub fn input_line<S: AsRef<str>>(message: S) -> Result<String> {
    print!("{}: ", message.as_ref());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// 编号选择输入，反复提示直到输入合法下标
pub fn select_index<S: AsRef<str>>(message: S, count: usize) -> Result<usize> {
    loop {
        let raw = input_line(message.as_ref())?;
        match raw.parse::<usize>() {
            Ok(idx) if idx < count => return Ok(idx),
            _ => Logger::warn(tf!("prompt.invalid_selection", raw)),
        }
    }
}
