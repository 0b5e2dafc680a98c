//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use chrono::{Local, NaiveDate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use super::state::{App, Screen};
use crate::models::{Field, char_len};
use components::{render_dialog_framework, render_input_widget};
use layouts::{centered_rect, scroll_start};

const HEADING_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;

/// 输入画面中的一行
enum Row {
    Heading(String),
    Input(Field),
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Heading(_) => HEADING_HEIGHT,
            Row::Input(_) => INPUT_HEIGHT,
        }
    }
}

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Setup => render_setup(frame, app),
        Screen::Input => render_inputs(frame, app, Local::now().date_naive()),
    }
}

fn render_setup(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_dialog_framework(frame, area, "📷 포토북 문구 생성");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 说明
            Constraint::Length(1), // 数量
            Constraint::Length(1), // 滑块
            Constraint::Min(1),
            Constraint::Length(2), // 帮助
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("생성할 문구 갯수를 정하고 입력하세요.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[0],
    );

    let count_line = Line::from(vec![
        Span::styled("문구 갯수: ", Style::default().fg(Color::White)),
        Span::styled(
            app.count.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(count_line).alignment(Alignment::Center),
        chunks[1],
    );

    let max = app.config.max_phrases.max(1);
    let ratio = (app.count as f64 / max as f64).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("1 ─ {}", max));
    frame.render_widget(gauge, chunks[2]);

    frame.render_widget(
        Paragraph::new("[←/→] 갯수 조절  [Enter] 입력창 생성하기  [q] 종료")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray)),
        chunks[4],
    );
}

fn render_inputs(frame: &mut Frame, app: &App, today: NaiveDate) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(3),    // 输入框
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_fields(frame, app, chunks[1], today);
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("사진 문구 입력")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title_top(Line::from("[Ctrl+R] 다시하기").right_aligned()),
        );
    frame.render_widget(title, area);
}

fn build_rows(app: &App) -> Vec<Row> {
    let mut rows = vec![
        Row::Heading("기념일 날짜".to_string()),
        Row::Input(Field::AnniversaryDate),
        Row::Heading("표지 문구".to_string()),
    ];
    rows.extend((0..app.form.cover_phrases.len()).map(|i| Row::Input(Field::Cover(i))));
    rows.push(Row::Heading(format!(
        "사진 문구 입력 ({}개)",
        app.form.phrases.len()
    )));
    rows.extend((0..app.form.phrases.len()).map(|i| Row::Input(Field::Phrase(i))));
    rows
}

fn render_fields(frame: &mut Frame, app: &App, area: Rect, today: NaiveDate) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = build_rows(app);
    let heights: Vec<u16> = rows.iter().map(Row::height).collect();
    let focused = app.focused_field();
    let target = rows
        .iter()
        .position(|row| matches!(row, Row::Input(field) if Some(*field) == focused))
        .unwrap_or(0);
    let mut start = scroll_start(&heights, target, inner.height);
    // 放得下时连同上方的分组标题一起显示
    if start > 0 && matches!(rows[start - 1], Row::Heading(_)) {
        let used: u16 = heights[start - 1..=target].iter().sum();
        if used <= inner.height {
            start -= 1;
        }
    }

    let max_length = app.form.max_length();
    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    for row in &rows[start..] {
        let height = row.height();
        if y + height > bottom {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, height);
        match row {
            Row::Heading(text) => {
                frame.render_widget(
                    Paragraph::new(text.as_str()).style(
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    rect,
                );
            }
            Row::Input(field) => {
                let value = app.form.value(*field).unwrap_or("");
                render_input_widget(
                    frame,
                    rect,
                    value,
                    &field.placeholder(max_length, today),
                    &format!("{}/{}", char_len(value), max_length),
                    Some(*field) == focused,
                    Color::Cyan,
                );
            }
        }
        y += height;
    }
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[Tab/↑↓] 이동  [Ctrl+Y] 전체 복사하기  [Ctrl+R] 다시하기  [Esc] 종료";

    let mut spans = vec![Span::styled(help_text, Style::default().fg(Color::Gray))];
    if let Some(message) = app.copy.message() {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(message, Style::default().fg(Color::Green)));
    }

    let help = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
