//! Layout components (navigation sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{FormFocus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 16;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the navigation links
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let current = app.state.current_view();
    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &format!("F{}", idx + 1),
            view.label(),
            current == Some(*view),
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.current_path),
        Style::default().fg(Color::Blue),
    )];

    let hints = get_view_hints(
        app.state.current_view(),
        app.order_form().map(|f| f.focus),
    );
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    let in_flight = app.in_flight();
    if in_flight > 0 {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Submitting ({in_flight})…"),
            Style::default().fg(Color::Yellow),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    if matches!(app.state.current_view(), Some(View::Order)) {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(&app.endpoint, Style::default().fg(Color::Gray)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: Option<View>, focus: Option<FormFocus>) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    match (view, focus) {
        (Some(View::Home), _) => "o:order  F1/F2:nav  q:quit".to_string(),
        (Some(View::Order), Some(FormFocus::Size)) => {
            format!("←/→:size  s/m/l:pick  Tab:next  {submit}:submit  Esc:home")
        }
        (Some(View::Order), Some(FormFocus::Toppings)) => {
            format!("↑/↓:move  Space:toggle  Tab:next  {submit}:submit  Esc:home")
        }
        (Some(View::Order), Some(FormFocus::Submit)) => {
            "Enter:submit  Tab:next  Esc:home".to_string()
        }
        (Some(View::Order), _) => format!("Tab:next  {submit}:submit  Esc:home"),
        (None, _) => "Esc:home  F1/F2:nav".to_string(),
    }
}
