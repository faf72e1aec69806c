//! Toast overlay in the top-right corner

use crate::state::{NotificationCenter, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 4;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Blue,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Danger => Color::Red,
    }
}

/// Stack active toasts from the top right of `area`, newest at the bottom.
/// Toasts that do not fit are not drawn.
pub fn draw(frame: &mut Frame, area: Rect, notifications: &NotificationCenter, now: Instant) {
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y + 1;

    for toast in notifications.active() {
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let offset = toast.slide_offset(now, width);
        let x = (area.x + area.width).saturating_sub(width + 1) + offset;
        let visible = width.saturating_sub(offset);
        if visible == 0 {
            y += TOAST_HEIGHT;
            continue;
        }

        let toast_area = Rect {
            x,
            y,
            width: visible,
            height: TOAST_HEIGHT,
        };
        let color = severity_color(toast.severity);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", toast.created_at.format("%H:%M:%S")));
        let body = Paragraph::new(Line::from(toast.message.as_str()))
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(Clear, toast_area);
        frame.render_widget(body, toast_area);
        y += TOAST_HEIGHT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    #[test]
    fn test_severity_colors_differ() {
        assert_ne!(severity_color(Severity::Success), severity_color(Severity::Danger));
        assert_ne!(severity_color(Severity::Info), severity_color(Severity::Warning));
    }

    #[test]
    fn test_draws_settled_toast() {
        let mut center = NotificationCenter::default();
        let start = Instant::now();
        center.notify_at("Saved", Severity::Success, start);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| {
                draw(frame, frame.area(), &center, start + Duration::from_secs(1))
            })
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Saved"));
    }

    #[test]
    fn test_small_area_does_not_panic() {
        let mut center = NotificationCenter::default();
        for i in 0..10 {
            center.notify(format!("toast {i}"), Severity::Info);
        }
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal
            .draw(|frame| draw(frame, frame.area(), &center, Instant::now()))
            .unwrap();
    }
}
