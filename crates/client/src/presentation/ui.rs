//! Screen composition for the quiz client.
//!
//! Lays out a centered content column over the document's background color
//! and dispatches to the widget for the current page. A session renders with
//! its own document's theme, so a fetched community quiz brings its colors
//! with it.
use anyhow::Result;
use quiz_core::{QuizDb, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    message::MessageLog,
    presentation::{
        terminal::Tui,
        theme::Palette,
        widgets::{footer, landing, loading, question, results},
    },
    state::{Page, PeerEntry},
};

/// Everything a frame needs, borrowed from the event loop.
pub struct RenderContext<'a> {
    pub page: &'a Page,
    pub local_db: &'a QuizDb,
    pub peers: &'a [PeerEntry],
    pub messages: &'a MessageLog,
    pub spinner_frame: usize,
    pub content_width: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext<'_>) -> Result<()> {
    terminal.draw(|frame| render_frame(frame, ctx))?;
    Ok(())
}

fn render_frame(frame: &mut Frame, ctx: &RenderContext<'_>) {
    let palette = match ctx.page {
        Page::Session(session) => Palette::from_theme(&session.db.theme),
        _ => Palette::from_theme(&ctx.local_db.theme),
    };

    // Paint the document background over the whole frame first.
    let background = Block::default().style(Style::default().bg(palette.main_bg));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let column = centered_column(chunks[0], ctx.content_width);

    match ctx.page {
        Page::Landing(state) => landing::render(
            frame,
            column,
            state,
            ctx.local_db,
            ctx.peers,
            ctx.messages,
            &palette,
        ),
        Page::Fetching(state) => loading::render(
            frame,
            column,
            &format!("Fetching {}...", state.address),
            ctx.spinner_frame,
            &palette,
        ),
        Page::Session(session) => match session.driver.session().screen() {
            Screen::Loading => {
                loading::render(frame, column, "Loading...", ctx.spinner_frame, &palette)
            }
            Screen::Quiz(_) => question::render(frame, column, session, &palette),
            Screen::Result => results::render(frame, column, session, &palette),
        },
    }

    footer::render(frame, chunks[1], ctx.page, &palette);
}

/// Centers a fixed-width column horizontally inside `area`.
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    chunks[1]
}
