mod assemble;
mod clipboard;
mod config;
mod errors;
mod logging;
mod models;
mod terminal;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::clipboard::SystemClipboard;
use crate::config::load_config;
use crate::terminal::TerminalGuard;
use crate::ui::{App, handle_key_event, handle_paste, render};

/// 事件轮询间隔，决定提示消息清除的精度
const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    // 配置文件路径 (~/.config/photobook/config.toml)
    let config_path = config::config_dir()
        .context("failed to locate config directory")?
        .join("config.toml");
    let config = load_config(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    // 日志失败不影响使用
    let logger = logging::log_dir().and_then(|dir| logging::init_logging(&config.log_level, &dir));
    let _logger = match logger {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("warning: file logging disabled: {err}");
            None
        }
    };
    log::info!(
        "event=config_loaded path={} default_count={} max_phrases={} max_length={} notice_millis={}",
        config_path.display(),
        config.default_count,
        config.max_phrases,
        config.max_length,
        config.notice_millis
    );

    // 创建应用状态
    let mut app = App::new(config, Box::new(SystemClipboard::new()));

    // 设置终端，之后的任何退出路径都会恢复
    terminal::install_panic_hook();
    let guard = TerminalGuard::enter().context("failed to prepare terminal")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    let restored = guard.finish();

    log::info!(
        "event=app_exit status={}",
        if result.is_ok() { "ok" } else { "error" }
    );
    result.context("terminal event loop failed")?;
    restored.context("failed to restore terminal")
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // 先把“复制中”画出来，再写剪贴板
        if app.flush_pending_copy(Instant::now()) {
            continue;
        }

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(app, key, Instant::now()) {
                        break;
                    }
                }
                Event::Paste(text) => handle_paste(app, &text, Instant::now()),
                _ => {}
            }
        }

        app.tick(Instant::now());
    }
    Ok(())
}
