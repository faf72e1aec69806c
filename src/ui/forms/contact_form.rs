//! Contact form view

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::FieldId;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw every field in tab order followed by the submit button
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.page.form;

    let border = if app.page.errors.has_errors() {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(app.page.messages.form_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(field_height(f)))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    for (index, field) in form.fields.iter().enumerate() {
        let id = FieldId(index);
        draw_field(
            frame,
            chunks[index],
            field,
            form.active_field() == Some(id),
            app.page.errors.message(id),
        );
    }

    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(chunks[form.fields.len()]);

    render_button(
        frame,
        button_row[0],
        &form.submit.label,
        form.is_submit_active(),
        !form.submit.disabled,
    );
}
