//! Layout components (content area, status bar)

use crate::app::{App, View};
use crate::state::Messages;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Content area above the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

fn view_hints(view: &View, messages: &'static Messages) -> &'static str {
    match view {
        View::Form => messages.hints_form,
        View::ThankYou { .. } => messages.hints_thank_you,
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
        view_hints(&app.view, app.page.messages),
        Style::default().fg(Color::Gray),
    )];

    if app.controller.is_submitting() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            app.page.messages.submit_pending,
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(err) = app.controller.last_error() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(err, Style::default().fg(Color::Red)));
    }

    if let View::ThankYou { destination } = &app.view {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("→ {destination}"),
            Style::default().fg(Color::Blue),
        ));
    }

    let quit_hint = app.page.messages.hint_quit;
    let quit_width = (quit_hint.chars().count() as u16).min(area.width);
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_width),
        y: area.height.saturating_sub(1),
        width: quit_width,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
