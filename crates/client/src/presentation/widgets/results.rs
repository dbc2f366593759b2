//! Results widget: greeting, score gauge, per-question breakdown.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
};

use quiz_core::Summary;

use crate::{presentation::theme::Palette, session::SessionPage};

pub fn render(frame: &mut Frame, area: Rect, session: &SessionPage, palette: &Palette) {
    let results = session.driver.session().results();
    let summary = Summary::from_results(results);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.primary))
        .title(" Results ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Score gauge
            Constraint::Min(0),    // Per-question breakdown
        ])
        .split(inner);

    render_greeting(frame, chunks[0], &session.player, &summary, palette);
    render_gauge(frame, chunks[1], &summary, palette);
    render_breakdown(frame, chunks[2], results, palette);
}

fn render_greeting(
    frame: &mut Frame,
    area: Rect,
    player: &str,
    summary: &Summary,
    palette: &Palette,
) {
    let text = if player.is_empty() {
        format!(
            "You got {} of {} questions right!",
            summary.correct, summary.total
        )
    } else {
        format!(
            "{}, you got {} of {} questions right!",
            player, summary.correct, summary.total
        )
    };

    let greeting = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(palette.contrast)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(greeting, area);
}

fn render_gauge(frame: &mut Frame, area: Rect, summary: &Summary, palette: &Palette) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.dim_style())
                .title(" Score "),
        )
        .gauge_style(Style::default().fg(palette.success))
        .ratio(f64::from(summary.percent()) / 100.0)
        .label(format!("{}%", summary.percent()));

    frame.render_widget(gauge, area);
}

fn render_breakdown(frame: &mut Frame, area: Rect, results: &[bool], palette: &Palette) {
    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(idx, &correct)| {
            let (mark, style) = if correct {
                ("Correct", Style::default().fg(palette.success))
            } else {
                ("Wrong", Style::default().fg(palette.wrong))
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:02} ", idx + 1), palette.dim_style()),
                Span::styled(mark, style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}
