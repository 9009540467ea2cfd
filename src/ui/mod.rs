//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);

    // Unmatched routes leave the main area empty
    match app.state.current_view() {
        Some(View::Home) => home::draw(frame, main_area),
        Some(View::Order) => {
            if let Some(form) = app.order_form() {
                forms::draw_order(frame, main_area, form);
            }
        }
        None => {}
    }

    layout::draw_status_bar(frame, app);
}
