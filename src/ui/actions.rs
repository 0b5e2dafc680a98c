//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 设置画面
    IncreaseCount,
    DecreaseCount,
    Confirm,

    // 输入画面
    FocusNext,
    FocusPrev,
    Input(char),    // 输入字符
    Paste(String),  // 粘贴文本
    DeleteChar,     // Backspace
    Reset,
    CopyAll,
}
