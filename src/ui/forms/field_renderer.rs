//! Field rendering utilities for forms

use crate::state::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies (borders included)
pub fn field_height(field: &Field) -> u16 {
    if field.is_multiline() {
        6
    } else {
        3
    }
}

/// Draw a form field, with its error message in the bottom border when invalid
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &Field,
    is_active: bool,
    error: Option<&str>,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let cursor = if is_active && !field.is_checkbox() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_checkbox() {
        Paragraph::new(Line::from(vec![
            Span::styled(field.display_value(), style),
            Span::raw(" "),
            Span::styled(field.label.as_str(), style),
        ]))
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = field
            .as_text()
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines).style(style)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.display_value(), style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let required = if field.required { " *" } else { "" };
    let title = if field.is_checkbox() {
        String::new()
    } else {
        format!(" {}{required} ", field.label)
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
