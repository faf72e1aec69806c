//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod thank_you;
mod toasts;

use crate::app::{App, View};
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match &app.view {
        View::Form => forms::draw_contact_form(frame, main_area, app),
        View::ThankYou { .. } => thank_you::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Toasts float above everything else
    toasts::draw(frame, main_area, &app.page.notifications, Instant::now());
}
