//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::actions::Action;
use super::state::{App, Screen};

/// 根据当前画面和按键获取对应的 Action
pub fn get_action(screen: Screen, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match (screen, key.code) {
            (_, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => Some(Action::Quit),
            (Screen::Input, KeyCode::Char('r')) => Some(Action::Reset),
            (Screen::Input, KeyCode::Char('y')) => Some(Action::CopyAll),
            _ => None,
        };
    }

    match screen {
        Screen::Setup => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Right
            | KeyCode::Up
            | KeyCode::Char('l')
            | KeyCode::Char('k')
            | KeyCode::Char('+')
            | KeyCode::Char('=') => Some(Action::IncreaseCount),
            KeyCode::Left
            | KeyCode::Down
            | KeyCode::Char('h')
            | KeyCode::Char('j')
            | KeyCode::Char('-') => Some(Action::DecreaseCount),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
            _ => None,
        },
        Screen::Input => match key.code {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Action::Input(c))
            }
            _ => None,
        },
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    match get_action(app.screen, key) {
        Some(action) => app.dispatch(action, now),
        None => false,
    }
}

/// 处理粘贴事件（仅输入画面有效）
pub fn handle_paste(app: &mut App, text: &str, now: Instant) {
    if app.screen == Screen::Input {
        app.dispatch(Action::Paste(text.to_string()), now);
    }
}
