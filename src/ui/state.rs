//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::time::{Duration, Instant};

use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::models::{Field, PhraseForm};

/// 应用状态
pub struct App {
    pub config: Config,
    pub count: usize,
    pub form: PhraseForm,
    pub screen: Screen,
    pub focus: usize, // index into form.fields()
    pub copy: CopyState,
    pub(super) clipboard: Box<dyn ClipboardSink>,
}

/// 当前画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Input,
}

/// 复制结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    NothingToCopy,
}

impl CopyOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            CopyOutcome::Copied => "✅ 전체 복사 완료!",
            CopyOutcome::Failed => "❌ 복사 실패.",
            CopyOutcome::NothingToCopy => "복사할 문구가 없습니다.",
        }
    }
}

/// 复制状态机: Idle -> Pending -> Settled -> Idle
#[derive(Debug, Clone, PartialEq)]
pub enum CopyState {
    Idle,
    /// 等待写入剪贴板的文本，同一时间最多一个
    Pending(String),
    Settled { outcome: CopyOutcome, clear_at: Instant },
}

impl CopyState {
    /// 状态栏显示的消息
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CopyState::Idle => None,
            CopyState::Pending(_) => Some("복사 중..."),
            CopyState::Settled { outcome, .. } => Some(outcome.message()),
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: Config, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            count: config.default_count,
            form: PhraseForm::new(config.max_length),
            screen: Screen::Setup,
            focus: 0,
            copy: CopyState::Idle,
            clipboard,
            config,
        }
    }

    /// 提示消息显示时长
    pub fn notice_delay(&self) -> Duration {
        Duration::from_millis(self.config.notice_millis)
    }

    /// 获取当前获得焦点的输入框
    pub fn focused_field(&self) -> Option<Field> {
        if self.screen != Screen::Input {
            return None;
        }
        self.form.fields().get(self.focus).copied()
    }
}
