mod config;
mod error;
mod logging;
mod models;
mod ui;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::{default_config_path, load_config};
use crate::error::AppError;
use crate::logging::{get_data_dir, init_logging};
use crate::ui::{App, render};

fn main() -> Result<(), AppError> {
    // 配置文件路径 (~/.config/tally/config.toml)
    let config_path = default_config_path()?;
    let config = load_config(&config_path)?;

    // 日志文件路径 (~/.local/share/tally/tally.log)
    let log_path = get_data_dir()?.join("tally.log");
    init_logging(&config.log.filter, &log_path)?;
    tracing::info!(config = %config_path.display(), "starting");

    // 创建应用状态
    let mut app = App::new(&config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => tracing::info!(value = app.counter.value(), "exiting"),
        Err(e) => tracing::error!("event loop failed: {e}"),
    }

    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // 只有计数器通知或视图状态变化时才重绘
        if app.take_redraw() {
            terminal.draw(|f| render(f, app))?;
        }

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui::handle_key_event(app, key)
            }
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            Event::Resize(_, _) => {
                app.request_redraw();
                false
            }
            _ => false,
        };

        if quit {
            break;
        }
    }
    Ok(())
}
