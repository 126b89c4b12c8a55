//! Status bar widget: one line reporting the last operation's outcome.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Status;

/// Renders `Status: <message>`.
///
/// Failures are shown in red, everything else in green.
#[mutants::skip]
pub fn draw_status_bar(status: Status, frame: &mut Frame, area: Rect) {
    let color = if status.is_error() {
        Color::Red
    } else {
        Color::Green
    };
    let line = Line::from(vec![
        Span::raw("Status: "),
        Span::styled(
            status.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
