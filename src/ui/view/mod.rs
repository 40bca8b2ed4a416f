//! 视图层模块
//!
//! 包含主渲染入口：居中卡片、数值显示、两个按钮和底部帮助栏

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::state::{App, Control, ControlAreas};
use components::{BIG_HEIGHT, ButtonKind, render_big_number, render_button};
use layouts::centered_fixed;

const CARD_WIDTH: u16 = 36;
const CARD_HEIGHT: u16 = 11;

/// 渲染 UI，并记录按钮区域供鼠标点击使用
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(CARD_HEIGHT), // 卡片
            Constraint::Length(3),        // 帮助
        ])
        .split(frame.area());

    app.areas = render_card(frame, app, chunks[0]);
    render_help(frame, app, chunks[1]);
}

fn render_card(frame: &mut Frame, app: &App, area: Rect) -> ControlAreas {
    let card = centered_fixed(CARD_WIDTH, CARD_HEIGHT, area);
    let block = Block::default()
        .title(app.labels.title.as_str())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Gray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1),          // 留白
            Constraint::Length(BIG_HEIGHT), // 数值
            Constraint::Length(1),          // 留白
            Constraint::Length(3),          // 按钮
        ])
        .split(inner);

    render_value(frame, app.counter.value(), rows[1]);
    render_buttons(frame, app, rows[3])
}

fn render_value(frame: &mut Frame, value: i64, area: Rect) {
    let style = Style::default().fg(Color::White);
    render_big_number(frame, area, value, style);
}

fn render_buttons(frame: &mut Frame, app: &App, area: Rect) -> ControlAreas {
    // 主按钮占满剩余宽度，次按钮按标签宽度
    let label_width = Line::from(app.labels.reset.as_str()).width();
    let reset_width = u16::try_from(label_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(reset_width),
        ])
        .split(area);

    render_button(
        frame,
        buttons[0],
        &app.labels.increment,
        ButtonKind::Primary,
        app.focus == Control::Increment,
    );
    render_button(
        frame,
        buttons[2],
        &app.labels.reset,
        ButtonKind::Secondary,
        app.focus == Control::Reset,
    );

    ControlAreas {
        increment: buttons[0],
        reset: buttons[2],
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[Space] +1  [r] 归零  [Tab] 切换  [Enter] 确认  [q] 退出";

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Labels};
    use crate::ui::actions::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_value_and_labels() {
        let mut app = App::new(&Config::default());
        for _ in 0..42 {
            app.dispatch(Action::Increment);
        }

        let screen = draw(&mut app);
        let big = components::big_number_lines(42);
        assert!(screen.contains(big[0].as_str()));
        assert!(screen.contains(big[2].as_str()));
        assert!(screen.contains("Click me"));
        assert!(screen.contains("Reset"));
        assert!(screen.contains("Counter"));
    }

    #[test]
    fn test_custom_labels() {
        let config = Config {
            labels: Labels {
                title: "Clicks".to_string(),
                increment: "Add".to_string(),
                reset: "Clear".to_string(),
            },
            ..Config::default()
        };
        let mut app = App::new(&config);

        let screen = draw(&mut app);
        assert!(screen.contains("Clicks"));
        assert!(screen.contains("Add"));
        assert!(screen.contains("Clear"));
        assert!(!screen.contains("Click me"));
    }

    #[test]
    fn test_records_button_areas() {
        let mut app = App::new(&Config::default());
        draw(&mut app);

        let areas = app.areas;
        assert!(areas.increment.width > 0 && areas.increment.height == 3);
        assert!(areas.reset.width > 0 && areas.reset.height == 3);
        assert!(areas.increment.right() <= areas.reset.left());
        assert_eq!(areas.increment.y, areas.reset.y);

        // 点击记录下来的 Reset 区域会归零
        app.dispatch(Action::Increment);
        let hit = areas.hit(areas.reset.x + 1, areas.reset.y + 1);
        assert_eq!(hit, Some(Control::Reset));
        app.dispatch(Action::Click(Control::Reset));
        assert_eq!(app.counter.value(), 0);
    }

    #[test]
    fn test_oversized_reset_label() {
        let config = Config {
            labels: Labels {
                reset: "x".repeat(usize::from(u16::MAX) - 2),
                ..Labels::default()
            },
            ..Config::default()
        };
        let mut app = App::new(&config);
        draw(&mut app);

        assert!(app.areas.reset.right() <= 100);
        assert!(app.areas.increment.right() <= 100);
        assert_eq!(app.areas.reset.height, 3);
    }

    #[test]
    fn test_help_shows_message() {
        let mut app = App::new(&Config::default());
        app.dispatch(Action::Reset);

        let screen = draw(&mut app);
        assert!(screen.contains("[q]"));
        assert!(screen.contains("已"));
    }
}
