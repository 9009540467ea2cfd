//! Order form rendering

use super::field_renderer::{draw_field_error, draw_select_field, draw_text_field};
use crate::state::{size_label, FormFocus, OrderForm, TOPPINGS};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the order form
pub fn draw_order(frame: &mut Frame, area: Rect, form: &OrderForm) {
    let block = Block::default()
        .title(" Order Your Pizza ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                         // Banner
            Constraint::Length(3),                         // Full name
            Constraint::Length(1),                         // Full name error
            Constraint::Length(3),                         // Size
            Constraint::Length(1),                         // Size error
            Constraint::Length(TOPPINGS.len() as u16 + 2), // Toppings
            Constraint::Length(BUTTON_HEIGHT),             // Submit
            Constraint::Min(0),                            // remaining space
        ])
        .margin(1)
        .split(area);

    draw_banner(frame, chunks[0], form);

    draw_text_field(
        frame,
        chunks[1],
        "Full Name",
        &form.values().full_name,
        "Type full name",
        form.focus == FormFocus::FullName,
    );
    draw_field_error(frame, chunks[2], form.errors().full_name);

    draw_select_field(
        frame,
        chunks[3],
        "Size",
        size_label(&form.values().size),
        form.focus == FormFocus::Size,
    );
    draw_field_error(frame, chunks[4], form.errors().size);

    draw_toppings(frame, chunks[5], form);

    let submit_area = Rect {
        width: chunks[6].width.min(14),
        ..chunks[6]
    };
    render_action_button(
        frame,
        submit_area,
        "Submit",
        form.focus == FormFocus::Submit,
        form.submit_enabled(),
        Some(Color::Green),
    );
}

fn draw_banner(frame: &mut Frame, area: Rect, form: &OrderForm) {
    let status = form.status();
    let line = if let Some(message) = status.success() {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = status.failure() {
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else {
        return;
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_toppings(frame: &mut Frame, area: Rect, form: &OrderForm) {
    let is_active = form.focus == FormFocus::Toppings;

    let lines: Vec<Line> = TOPPINGS
        .iter()
        .enumerate()
        .map(|(idx, topping)| {
            let checked = form.values().toppings.contains(topping.id);
            let mark = if checked { "[x]" } else { "[ ]" };
            let style = if is_active && idx == form.topping_cursor {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {mark} {}", topping.label), style))
        })
        .collect();

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Toppings ")
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
