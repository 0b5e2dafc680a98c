//! 通用 UI 组件
//!
//! 对话框、输入框等通用组件

use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带字数计数和占位提示的单行输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    placeholder: &str,
    counter: &str,
    is_focused: bool,
    active_color: Color,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let (text, text_style) = if value.is_empty() {
        (placeholder, Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::White))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_top(Line::from(counter.to_string()).right_aligned());
    let inner = block.inner(area);

    let input = Paragraph::new(text).style(text_style).block(block);
    frame.render_widget(input, area);

    if is_focused && inner.width > 0 && inner.height > 0 {
        let offset = Line::from(value).width() as u16;
        let x = inner.x + offset.min(inner.width - 1);
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}
