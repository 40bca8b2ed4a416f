//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将终端事件转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
///
/// Ctrl+C 退出；其余带 Ctrl/Alt 的组合键一律忽略
pub fn get_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Char('c') => Some(Action::Increment),
        KeyCode::Char('r') | KeyCode::Char('0') => Some(Action::Reset),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::Activate),
        _ => None,
    }
}

/// 左键按下且落在按钮内才算点击
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app
            .areas
            .hit(mouse.column, mouse.row)
            .map(Action::Click),
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件，返回是否退出
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> bool {
    match get_mouse_action(app, mouse) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}
