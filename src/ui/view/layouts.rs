//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 居中矩形，按百分比
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// 计算滚动起点，使 `target` 行完整落在可见高度内
///
/// 能从头显示时返回 0，否则返回让 `target` 贴底的最小起点。
pub fn scroll_start(heights: &[u16], target: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let target = target.min(heights.len() - 1);
    let mut start = 0;
    let mut used: u32 = heights[..=target].iter().map(|h| u32::from(*h)).sum();
    while used > u32::from(available) && start < target {
        used -= u32::from(heights[start]);
        start += 1;
    }
    start
}
