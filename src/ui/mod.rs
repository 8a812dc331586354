//! UI module for rendering the demo form

mod field_renderer;

use crate::app::App;
use field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let views = app.field_views();

    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(views.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let validity = if app.form.is_valid() {
        Span::styled("valid", Style::default().fg(Color::Green))
    } else {
        Span::styled("invalid", Style::default().fg(Color::Red))
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Sign up ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("("),
        validity,
        Span::raw(format!(", {} changes)", app.change_count.get())),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, chunks[0]);

    let active_label = app.active_field().label();
    for (index, view) in views.iter().enumerate() {
        draw_field(frame, chunks[index + 1], view, view.label == active_label);
    }

    let help = app
        .status_message
        .clone()
        .unwrap_or_else(|| "Tab/↓: next  Shift+Tab/↑: previous  Enter: submit  Esc: quit".to_string());
    let footer = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[chunks.len() - 1]);
}
