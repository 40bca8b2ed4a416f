//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use super::state::Control;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // 直接操作计数器
    Increment,
    Reset,

    // 焦点
    FocusNext,
    FocusPrev,
    Activate, // Enter，触发当前聚焦的控件

    Click(Control), // 鼠标点击按钮
}
