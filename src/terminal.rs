//! 终端模式管理
//!
//! 进入 raw mode 后，无论正常退出、`?` 提前返回还是 panic，都要恢复终端。

use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// 恢复终端：每一步都执行，返回第一个错误
pub fn restore<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableBracketedPaste, Show);
    raw.and(screen)
}

/// 持有期间终端处于 raw mode + 备用屏幕，释放时恢复
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // 之后任何失败都由 Drop 恢复
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
        Ok(guard)
    }

    /// 正常退出时主动恢复，以便上报错误
    pub fn finish(mut self) -> io::Result<()> {
        self.active = false;
        restore(&mut io::stdout())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Err(err) = restore(&mut io::stdout()) {
            log::warn!("event=terminal_restore status=error error={}", err);
        }
    }
}

/// panic 时先恢复终端再记录位置，然后交给原有的 hook 打印
pub fn install_panic_hook() {
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore(&mut io::stdout());
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        log::error!("event=panic_captured status=error location={}", location);
        log::logger().flush();
        previous_hook(panic_info);
    }));
}
