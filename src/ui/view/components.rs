//! 通用 UI 组件
//!
//! 按钮、大号数字等通用组件

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// 大号数字的行数
pub const BIG_HEIGHT: u16 = 3;

/// 3x3 块字符字形
fn glyph(c: char) -> Option<[&'static str; 3]> {
    let rows = match c {
        '0' => ["█▀█", "█ █", "▀▀▀"],
        '1' => ["▀█ ", " █ ", "▀▀▀"],
        '2' => ["▀▀█", "█▀▀", "▀▀▀"],
        '3' => ["▀▀█", " ▀█", "▀▀▀"],
        '4' => ["█ █", "▀▀█", "  ▀"],
        '5' => ["█▀▀", "▀▀█", "▀▀▀"],
        '6' => ["█▀▀", "█▀█", "▀▀▀"],
        '7' => ["▀▀█", "  █", "  ▀"],
        '8' => ["█▀█", "█▀█", "▀▀▀"],
        '9' => ["█▀█", "▀▀█", "▀▀▀"],
        '-' => ["   ", "▀▀▀", "   "],
        _ => return None,
    };
    Some(rows)
}

/// 将整数拼成三行大号文字，字形之间空一列
pub fn big_number_lines(value: i64) -> [String; 3] {
    let mut lines: [String; 3] = Default::default();
    for (i, c) in value.to_string().chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        for (line, row) in lines.iter_mut().zip(rows) {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(row);
        }
    }
    lines
}

/// [组件] 大号数字；放不下时退回单行粗体
pub fn render_big_number(frame: &mut Frame, area: Rect, value: i64, style: Style) {
    let lines = big_number_lines(value);
    let width = Line::from(lines[0].as_str()).width();

    if area.height >= BIG_HEIGHT && width <= usize::from(area.width) {
        let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
        frame.render_widget(
            Paragraph::new(text).alignment(Alignment::Center).style(style),
            area,
        );
    } else {
        let middle = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        frame.render_widget(
            Paragraph::new(value.to_string())
                .alignment(Alignment::Center)
                .style(style.add_modifier(Modifier::BOLD)),
            middle,
        );
    }
}

/// 按钮样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// 实心青色
    Primary,
    /// 仅边框
    Secondary,
}

/// 按钮样式，聚焦时相当于悬停态
pub fn button_style(kind: ButtonKind, is_focused: bool) -> Style {
    match (kind, is_focused) {
        (ButtonKind::Primary, false) => Style::default().bg(Color::Cyan).fg(Color::Black),
        (ButtonKind::Primary, true) => Style::default()
            .bg(Color::LightCyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        (ButtonKind::Secondary, false) => Style::default().fg(Color::Gray),
        (ButtonKind::Secondary, true) => Style::default()
            .bg(Color::DarkGray)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

/// [组件] 带边框的按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, kind: ButtonKind, is_focused: bool) {
    let style = button_style(kind, is_focused);

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(style),
        );
    frame.render_widget(button, area);
}
