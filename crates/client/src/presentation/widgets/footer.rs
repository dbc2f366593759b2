//! Key hint footer, one line at the bottom of every page.

use quiz_core::ScreenPhase;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    presentation::theme::Palette,
    state::{LandingFocus, Page},
};

pub fn render(frame: &mut Frame, area: Rect, page: &Page, palette: &Palette) {
    let spans = match page {
        Page::Landing(state) => match state.focus {
            LandingFocus::Name => vec![
                Span::raw("[Enter] Play | "),
                Span::raw("[Tab] Next | "),
                Span::raw("[Esc] Quit"),
            ],
            _ => vec![
                Span::raw("[Enter] Select | "),
                Span::raw("[Tab/↓] Next | "),
                Span::raw("[Shift+Tab/↑] Prev | "),
                Span::raw("[q] Quit"),
            ],
        },
        Page::Fetching(_) => vec![Span::raw("[q] Quit")],
        Page::Session(session) => match session.driver.session().phase() {
            ScreenPhase::Loading => vec![Span::raw("[Esc] Back | "), Span::raw("[q] Quit")],
            ScreenPhase::Quiz => vec![
                Span::raw("[↑/↓] Select | "),
                Span::raw("[1-9] Jump | "),
                Span::raw("[Enter] Confirm | "),
                Span::raw("[Esc] Back | "),
                Span::raw("[q] Quit"),
            ],
            ScreenPhase::Result => vec![
                Span::raw("[Enter/Esc] Back to home | "),
                Span::raw("[q] Quit"),
            ],
        },
    };

    let footer = Paragraph::new(Line::from(spans)).style(palette.dim_style());
    frame.render_widget(footer, area);
}
