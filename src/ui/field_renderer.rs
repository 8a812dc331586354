//! Field rendering utilities for forms

use crate::app::FieldView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn accent(field: &FieldView, is_active: bool) -> Color {
    match (field.error, is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    }
}

/// Draw one bound input, with its helper text on the bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView, is_active: bool) {
    let color = accent(field, is_active);
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_str = if field.text.is_empty() && !is_active {
        "(empty)"
    } else {
        field.text.as_str()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    if let Some(helper_text) = &field.helper_text {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {} ", helper_text),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
