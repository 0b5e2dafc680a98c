//! 剪贴板适配
//!
//! `ClipboardSink` 是应用唯一的外部协作者，测试中可替换为假实现。

use crate::errors::ClipboardError;

/// 接收组装好的文本
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// 基于 arboard 的系统剪贴板
///
/// 句柄在首次写入时创建并一直持有：X11/Wayland 下选区归属于持有者，
/// 句柄被释放后内容会丢失。
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new()?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard handle missing".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let result = self.handle()?.set_text(text);
        if result.is_err() {
            // 下次重新初始化
            self.inner = None;
        }
        result.map_err(ClipboardError::from)
    }
}
