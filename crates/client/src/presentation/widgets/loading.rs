//! Spinner widget for the loading screen and in-flight peer fetches.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::Palette;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, label: &str, spinner_frame: usize, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let spinner = Paragraph::new(vec![
        Line::from(Span::styled(glyph, Style::default().fg(palette.secondary))),
        Line::from(Span::styled(label, Style::default().fg(palette.contrast))),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(spinner, chunks[1]);
}
