//! Field rendering utilities for forms

use crate::state::ValidationError;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn focus_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw a single-line text input with a placeholder when empty
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
) {
    let cursor = if is_active { "▌" } else { "" };

    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value, Style::default().fg(Color::White))
    };

    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            value_span,
        ])
    } else {
        Line::from(vec![
            value_span,
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a one-of-many selector showing the current option between arrows
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    option_label: &str,
    is_active: bool,
) {
    let arrow_style = focus_style(is_active);
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(option_label, Style::default().fg(Color::White)),
        Span::styled(" ▶", arrow_style),
    ]);

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(focus_style(is_active));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the inline error line under a field; blank when there is none
pub fn draw_field_error(frame: &mut Frame, area: Rect, error: Option<ValidationError>) {
    if let Some(error) = error {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(paragraph, area);
    }
}
