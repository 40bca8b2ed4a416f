//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// 在 `r` 中居中放置固定尺寸的区域，空间不足时收缩到 `r`
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height.min(r.height))])
        .flex(Flex::Center)
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(width.min(r.width))])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}
