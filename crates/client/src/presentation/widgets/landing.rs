//! Landing screen widget: name entry, play button, community quiz list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use quiz_core::QuizDb;

use crate::{
    message::MessageLog,
    presentation::theme::Palette,
    state::{LandingFocus, LandingState, PeerEntry},
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &LandingState,
    db: &QuizDb,
    peers: &[PeerEntry],
    messages: &MessageLog,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Quiz title banner
            Constraint::Length(3), // Name input
            Constraint::Length(3), // Play button
            Constraint::Min(0),    // Community quizzes
            Constraint::Length(1), // Notice line
        ])
        .split(area);

    render_title(frame, chunks[0], db, palette);
    render_name_input(frame, chunks[1], state, palette);
    render_play_button(frame, chunks[2], state, palette);
    render_peer_list(frame, chunks[3], state, peers, palette);
    render_notice(frame, chunks[4], messages, palette);
}

fn render_title(frame: &mut Frame, area: Rect, db: &QuizDb, palette: &Palette) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(db.title.clone(), palette.title_style())),
        Line::from(Span::styled(
            db.description.clone(),
            Style::default().fg(palette.contrast),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

fn render_name_input(frame: &mut Frame, area: Rect, state: &LandingState, palette: &Palette) {
    let focused = state.focus == LandingFocus::Name;
    let border_style = if focused {
        Style::default().fg(palette.secondary)
    } else {
        palette.dim_style()
    };

    let line = if state.name.is_empty() && !focused {
        Line::from(Span::styled("Tell us your name", palette.dim_style()))
    } else {
        let mut spans = vec![Span::styled(
            state.name.clone(),
            Style::default().fg(palette.contrast),
        )];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(palette.secondary)));
        }
        Line::from(spans)
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Name "),
    );

    frame.render_widget(input, area);
}

fn render_play_button(frame: &mut Frame, area: Rect, state: &LandingState, palette: &Palette) {
    let focused = state.focus == LandingFocus::Play;
    let enabled = state.can_play();

    let border_style = if focused {
        Style::default().fg(palette.secondary)
    } else {
        palette.dim_style()
    };
    let (label, label_style) = if enabled {
        (
            format!(" Play as {} ", state.name.trim()),
            Style::default()
                .fg(palette.contrast)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (" Play ".to_string(), palette.dim_style())
    };

    let button = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(button, area);
}

fn render_peer_list(
    frame: &mut Frame,
    area: Rect,
    state: &LandingState,
    peers: &[PeerEntry],
    palette: &Palette,
) {
    let items: Vec<ListItem> = if peers.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No community quizzes available",
            palette.dim_style(),
        )))]
    } else {
        peers
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let is_selected = state.focus == LandingFocus::Peer(idx);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        if is_selected { "► " } else { "  " },
                        Style::default().fg(palette.primary),
                    ),
                    Span::styled(
                        entry.address.slug(),
                        if is_selected {
                            Style::default()
                                .fg(palette.secondary)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(palette.contrast)
                        },
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.dim_style())
            .title(" Community quizzes "),
    );

    frame.render_widget(list, area);
}

fn render_notice(frame: &mut Frame, area: Rect, messages: &MessageLog, palette: &Palette) {
    let Some(entry) = messages.latest() else {
        return;
    };

    let notice = Paragraph::new(Line::from(Span::styled(
        entry.text.clone(),
        palette.message_style(entry.level),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(notice, area);
}
