//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use std::time::Instant;

use super::actions::Action;
use super::state::{App, CopyOutcome, CopyState, Screen};
use crate::assemble::assemble;
use crate::models::{Field, PhraseForm};

impl App {
    /// 核心逻辑分发，返回是否退出
    ///
    /// 不属于当前画面的 Action 一律忽略。
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match (self.screen, action) {
            (_, Action::Quit) => return true,

            (Screen::Setup, Action::IncreaseCount) => self.step_count(1),
            (Screen::Setup, Action::DecreaseCount) => self.step_count(-1),
            (Screen::Setup, Action::Confirm) => self.confirm(),

            (Screen::Input, Action::FocusNext) => self.move_focus(1),
            (Screen::Input, Action::FocusPrev) => self.move_focus(-1),
            (Screen::Input, Action::Input(c)) => {
                if let Some(value) = self.focused_value() {
                    let mut value = value.to_string();
                    value.push(c);
                    self.edit_focused(value);
                }
            }
            (Screen::Input, Action::Paste(text)) => {
                if let Some(value) = self.focused_value() {
                    let mut value = value.to_string();
                    value.extend(text.chars().filter(|c| !c.is_control()));
                    self.edit_focused(value);
                }
            }
            (Screen::Input, Action::DeleteChar) => {
                if let Some(value) = self.focused_value() {
                    let mut value = value.to_string();
                    value.pop();
                    self.edit_focused(value);
                }
            }
            (Screen::Input, Action::Reset) => self.reset(),
            (Screen::Input, Action::CopyAll) => self.copy_all(now),

            (screen, action) => {
                log::debug!(
                    "event=action_ignored screen={:?} action={}",
                    screen,
                    action_name(&action)
                );
            }
        }
        false
    }

    // ============ 设置画面 ============

    /// 设置文案数量（范围由步进控件保证）
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// 步进控件：在 [1, max_phrases] 内增减
    pub fn step_count(&mut self, delta: isize) {
        let next = self
            .count
            .saturating_add_signed(delta)
            .clamp(1, self.config.max_phrases);
        self.set_count(next);
    }

    /// 生成输入框并进入输入画面
    pub fn confirm(&mut self) {
        self.form.allocate_phrases(self.count);
        self.focus = 0;
        self.screen = Screen::Input;
        log::info!("event=confirm count={}", self.count);
    }

    // ============ 输入画面 ============

    /// 替换字段内容，超长时丢弃
    pub fn edit_field(&mut self, field: Field, value: String) -> bool {
        let accepted = self.form.edit_field(field, value);
        if !accepted {
            log::debug!("event=edit_rejected field={:?}", field);
        }
        accepted
    }

    fn edit_focused(&mut self, value: String) {
        if let Some(field) = self.focused_field() {
            self.edit_field(field, value);
        }
    }

    fn focused_value(&self) -> Option<&str> {
        self.focused_field().and_then(|field| self.form.value(field))
    }

    /// 焦点循环移动
    pub fn move_focus(&mut self, delta: isize) {
        let total = self.form.fields().len();
        if total == 0 {
            return;
        }
        let current = self.focus.min(total - 1) as isize;
        self.focus = (current + delta).rem_euclid(total as isize) as usize;
    }

    /// 恢复初始状态并回到设置画面
    pub fn reset(&mut self) {
        self.count = self.config.default_count;
        self.form = PhraseForm::new(self.config.max_length);
        self.screen = Screen::Setup;
        self.focus = 0;
        self.copy = CopyState::Idle;
        log::info!("event=reset");
    }

    // ============ 复制 ============

    /// 组装文本；为空时直接提示，否则进入 Pending 等待写入
    pub fn copy_all(&mut self, now: Instant) {
        if matches!(self.copy, CopyState::Pending(_)) {
            return;
        }
        let text = assemble(
            &self.form.anniversary_date,
            &self.form.cover_phrases,
            &self.form.phrases,
        );
        if text.is_empty() {
            self.settle(CopyOutcome::NothingToCopy, now);
        } else {
            self.copy = CopyState::Pending(text);
        }
    }

    /// 执行挂起的剪贴板写入，返回是否有写入发生
    pub fn flush_pending_copy(&mut self, now: Instant) -> bool {
        let text = match std::mem::replace(&mut self.copy, CopyState::Idle) {
            CopyState::Pending(text) => text,
            other => {
                self.copy = other;
                return false;
            }
        };

        let outcome = match self.clipboard.write_text(&text) {
            Ok(()) => CopyOutcome::Copied,
            Err(err) => {
                log::warn!("event=clipboard_write status=error error={}", err);
                CopyOutcome::Failed
            }
        };
        self.settle(outcome, now);
        true
    }

    fn settle(&mut self, outcome: CopyOutcome, now: Instant) {
        log::info!("event=copy outcome={:?}", outcome);
        self.copy = CopyState::Settled {
            outcome,
            clear_at: now + self.notice_delay(),
        };
    }

    /// 到期后清除提示，返回是否发生变化
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.copy {
            CopyState::Settled { clear_at, .. } if now >= clear_at => {
                self.copy = CopyState::Idle;
                true
            }
            _ => false,
        }
    }
}

/// 日志里只记录 Action 的种类，不记录输入内容
fn action_name(action: &Action) -> &'static str {
    match action {
        Action::Quit => "quit",
        Action::IncreaseCount => "increase_count",
        Action::DecreaseCount => "decrease_count",
        Action::Confirm => "confirm",
        Action::FocusNext => "focus_next",
        Action::FocusPrev => "focus_prev",
        Action::Input(_) => "input",
        Action::Paste(_) => "paste",
        Action::DeleteChar => "delete_char",
        Action::Reset => "reset",
        Action::CopyAll => "copy_all",
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::clipboard::fake::RecordingClipboard;
    use crate::config::Config;

    fn app_with(clipboard: RecordingClipboard) -> App {
        App::new(Config::default(), Box::new(clipboard))
    }

    fn input_app(count: usize) -> (App, RecordingClipboard) {
        let clipboard = RecordingClipboard::default();
        let mut app = app_with(clipboard.clone());
        app.set_count(count);
        app.confirm();
        (app, clipboard)
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.dispatch(Action::Input(c), now);
        }
    }

    #[test]
    fn confirm_allocates_empty_slots_for_every_count() {
        for n in 1..=20 {
            let (app, _) = input_app(n);
            assert_eq!(app.screen, Screen::Input);
            assert_eq!(app.form.phrases, vec![String::new(); n]);
        }
    }

    #[test]
    fn stepper_stays_within_bounds() {
        let mut app = app_with(RecordingClipboard::default());
        assert_eq!(app.count, 5);
        for _ in 0..30 {
            app.dispatch(Action::IncreaseCount, Instant::now());
        }
        assert_eq!(app.count, 20);
        for _ in 0..30 {
            app.dispatch(Action::DecreaseCount, Instant::now());
        }
        assert_eq!(app.count, 1);
    }

    #[test]
    fn typing_fills_focused_field_and_drops_overflow() {
        let (mut app, _) = input_app(2);
        let now = Instant::now();

        type_text(&mut app, "2024.10.26", now);
        assert_eq!(app.form.anniversary_date, "2024.10.26");

        app.dispatch(Action::FocusNext, now);
        type_text(&mut app, &"x".repeat(35), now);
        assert_eq!(app.form.cover_phrases[0], "x".repeat(28));

        app.dispatch(Action::DeleteChar, now);
        assert_eq!(app.form.cover_phrases[0].len(), 27);
    }

    #[test]
    fn over_limit_paste_is_discarded_whole() {
        let (mut app, _) = input_app(1);
        let now = Instant::now();
        type_text(&mut app, "abc", now);

        app.dispatch(Action::Paste("d".repeat(26)), now);
        assert_eq!(app.form.anniversary_date, "abc");

        app.dispatch(Action::Paste("de\nf".to_string()), now);
        assert_eq!(app.form.anniversary_date, "abcdef");
    }

    #[test]
    fn focus_wraps_around_all_fields() {
        let (mut app, _) = input_app(2);
        let now = Instant::now();
        assert_eq!(app.focused_field(), Some(Field::AnniversaryDate));

        app.dispatch(Action::FocusPrev, now);
        assert_eq!(app.focused_field(), Some(Field::Phrase(1)));

        app.dispatch(Action::FocusNext, now);
        app.dispatch(Action::FocusNext, now);
        assert_eq!(app.focused_field(), Some(Field::Cover(0)));
    }

    #[test]
    fn reset_restores_initial_state_from_anywhere() {
        let (mut app, _) = input_app(12);
        let now = Instant::now();
        type_text(&mut app, "date", now);
        app.dispatch(Action::FocusNext, now);
        type_text(&mut app, "cover", now);
        app.dispatch(Action::CopyAll, now);
        app.flush_pending_copy(now);

        app.dispatch(Action::Reset, now);

        assert_eq!(app.count, 5);
        assert!(app.form.phrases.is_empty());
        assert_eq!(app.form.anniversary_date, "");
        assert_eq!(app.form.cover_phrases, vec!["", ""]);
        assert_eq!(app.screen, Screen::Setup);
        assert_eq!(app.copy, CopyState::Idle);
    }

    #[test]
    fn reset_discards_pending_clipboard_write() {
        let (mut app, clipboard) = input_app(2);
        let now = Instant::now();
        type_text(&mut app, "2024.10.26", now);
        app.dispatch(Action::CopyAll, now);
        assert!(matches!(app.copy, CopyState::Pending(_)));

        app.dispatch(Action::Reset, now);

        assert_eq!(app.copy, CopyState::Idle);
        assert!(!app.flush_pending_copy(now));
        assert!(clipboard.writes.borrow().is_empty());
        assert_eq!(app.screen, Screen::Setup);
    }

    #[test]
    fn reset_after_stepping_count_on_setup_restores_default_count() {
        let (mut app, _) = input_app(3);
        let now = Instant::now();
        app.dispatch(Action::Reset, now);
        for _ in 0..4 {
            app.dispatch(Action::IncreaseCount, now);
        }
        assert_eq!(app.count, 9);

        app.reset();

        assert_eq!(app.count, 5);
        assert_eq!(app.screen, Screen::Setup);
        assert!(app.form.phrases.is_empty());
        assert_eq!(app.form.cover_phrases, vec!["", ""]);
        assert_eq!(app.copy, CopyState::Idle);
    }

    #[test]
    fn setup_actions_are_ignored_on_input_screen() {
        let (mut app, _) = input_app(3);
        let now = Instant::now();
        app.dispatch(Action::FocusPrev, now);
        type_text(&mut app, "last page", now);

        app.dispatch(Action::Confirm, now);
        app.dispatch(Action::IncreaseCount, now);

        assert_eq!(app.screen, Screen::Input);
        assert_eq!(app.count, 3);
        assert_eq!(app.form.phrases.len(), 3);
        assert_eq!(app.form.phrases[2], "last page");
    }

    #[test]
    fn input_actions_are_ignored_on_setup_screen() {
        let clipboard = RecordingClipboard::default();
        let mut app = app_with(clipboard.clone());
        let now = Instant::now();
        app.dispatch(Action::IncreaseCount, now);

        app.dispatch(Action::Input('x'), now);
        app.dispatch(Action::Paste("pasted".to_string()), now);
        app.dispatch(Action::CopyAll, now);
        app.dispatch(Action::Reset, now);

        assert_eq!(app.screen, Screen::Setup);
        assert_eq!(app.count, 6);
        assert_eq!(app.form.anniversary_date, "");
        assert_eq!(app.copy, CopyState::Idle);
        assert!(!app.flush_pending_copy(now));
        assert!(clipboard.writes.borrow().is_empty());
    }

    #[test]
    fn copy_with_nothing_entered_reports_and_skips_clipboard() {
        let (mut app, clipboard) = input_app(3);
        let now = Instant::now();

        app.dispatch(Action::CopyAll, now);
        assert_eq!(app.copy.message(), Some("복사할 문구가 없습니다."));
        assert!(!app.flush_pending_copy(now));
        assert!(clipboard.writes.borrow().is_empty());
    }

    #[test]
    fn copy_writes_assembled_text_once_flushed() {
        let (mut app, clipboard) = input_app(2);
        let now = Instant::now();
        type_text(&mut app, "2024.10.26", now);
        app.dispatch(Action::FocusNext, now);
        type_text(&mut app, "Our Trip", now);
        app.dispatch(Action::FocusNext, now);
        app.dispatch(Action::FocusNext, now);
        type_text(&mut app, "Day one", now);

        app.dispatch(Action::CopyAll, now);
        assert!(matches!(app.copy, CopyState::Pending(_)));
        assert_eq!(app.copy.message(), Some("복사 중..."));
        assert!(clipboard.writes.borrow().is_empty());

        assert!(app.flush_pending_copy(now));
        assert_eq!(
            *clipboard.writes.borrow(),
            vec!["2024.10.26\n\nOur Trip\n\n1. Day one".to_string()]
        );
        assert_eq!(app.copy.message(), Some("✅ 전체 복사 완료!"));
    }

    #[test]
    fn second_copy_while_pending_is_ignored() {
        let (mut app, clipboard) = input_app(1);
        let now = Instant::now();
        type_text(&mut app, "first", now);
        app.dispatch(Action::CopyAll, now);
        type_text(&mut app, "!", now);
        app.dispatch(Action::CopyAll, now);

        app.flush_pending_copy(now);
        assert_eq!(*clipboard.writes.borrow(), vec!["first".to_string()]);
    }

    #[test]
    fn clipboard_failure_shows_failure_message() {
        let mut app = app_with(RecordingClipboard::failing());
        app.confirm();
        let now = Instant::now();
        type_text(&mut app, "x", now);

        app.dispatch(Action::CopyAll, now);
        app.flush_pending_copy(now);
        assert_eq!(app.copy.message(), Some("❌ 복사 실패."));
    }

    #[test]
    fn message_clears_exactly_after_delay() {
        let (mut app, _) = input_app(1);
        let start = Instant::now();
        type_text(&mut app, "x", start);
        app.dispatch(Action::CopyAll, start);
        app.flush_pending_copy(start);

        let delay = app.notice_delay();
        assert!(!app.tick(start + delay - Duration::from_millis(1)));
        assert_eq!(app.copy.message(), Some("✅ 전체 복사 완료!"));

        assert!(app.tick(start + delay));
        assert_eq!(app.copy, CopyState::Idle);
    }

    #[test]
    fn newer_message_restarts_the_timer() {
        let (mut app, _) = input_app(1);
        let start = Instant::now();
        app.dispatch(Action::CopyAll, start);

        let later = start + Duration::from_millis(1500);
        type_text(&mut app, "x", later);
        app.dispatch(Action::CopyAll, later);
        app.flush_pending_copy(later);

        assert!(!app.tick(start + app.notice_delay()));
        assert_eq!(app.copy.message(), Some("✅ 전체 복사 완료!"));
        assert!(app.tick(later + app.notice_delay()));
    }

    #[test]
    fn quit_is_reported_to_caller() {
        let mut app = app_with(RecordingClipboard::default());
        assert!(app.dispatch(Action::Quit, Instant::now()));
        assert!(!app.dispatch(Action::Confirm, Instant::now()));
    }
}
