//! Question widget: progress header, statement, alternatives, confirm row.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use quiz_core::{Presenter, Question};

use crate::{presentation::theme::Palette, session::SessionPage};

pub fn render(frame: &mut Frame, area: Rect, session: &SessionPage, palette: &Palette) {
    let Some((presenter, question)) = session.driver.session().current() else {
        return;
    };
    let total = session.driver.session().total_questions();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.primary))
        .title(format!(
            " Question {} of {} ",
            presenter.index() + 1,
            total
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                 // Image URL line
            Constraint::Min(2),                                    // Title + description
            Constraint::Length(question.alternatives.len() as u16), // Alternatives
            Constraint::Length(2),                                 // Verdict / confirm row
        ])
        .split(inner);

    render_image_line(frame, chunks[0], &question.image, palette);
    render_statement(frame, chunks[1], question, palette);
    render_alternatives(frame, chunks[2], presenter, question, palette);
    render_confirm_row(frame, chunks[3], presenter, question, palette);
}

fn render_image_line(frame: &mut Frame, area: Rect, image: &str, palette: &Palette) {
    if image.is_empty() {
        return;
    }

    let line = Line::from(vec![
        Span::styled("img: ", palette.dim_style()),
        Span::styled(
            image,
            Style::default()
                .fg(palette.secondary)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_statement(frame: &mut Frame, area: Rect, question: &Question, palette: &Palette) {
    let mut lines = vec![Line::from(Span::styled(
        question.title.clone(),
        Style::default()
            .fg(palette.contrast)
            .add_modifier(Modifier::BOLD),
    ))];
    if !question.description.is_empty() {
        lines.push(Line::from(Span::styled(
            question.description.clone(),
            Style::default().fg(palette.contrast),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_alternatives(
    frame: &mut Frame,
    area: Rect,
    presenter: &Presenter,
    question: &Question,
    palette: &Palette,
) {
    // One Option for every row: unselected rows only care that the reveal
    // is open, not about its verdict.
    let reveal = presenter
        .is_revealed()
        .then(|| presenter.selected().is_some_and(|s| question.is_correct(s)));

    let items: Vec<ListItem> = question
        .alternatives
        .iter()
        .enumerate()
        .map(|(idx, alternative)| {
            let is_selected = presenter.selected() == Some(idx);
            let marker = if is_selected { "► " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}. {}", marker, idx + 1, alternative),
                palette.alternative_style(is_selected, reveal),
            )))
        })
        .collect();

    frame.render_widget(List::new(items), area);
}

fn render_confirm_row(
    frame: &mut Frame,
    area: Rect,
    presenter: &Presenter,
    question: &Question,
    palette: &Palette,
) {
    let line = if presenter.is_revealed() {
        let correct = presenter.selected().is_some_and(|s| question.is_correct(s));
        if correct {
            Line::from(Span::styled(
                "✓ You got it right!",
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "✗ You got it wrong!",
                Style::default()
                    .fg(palette.wrong)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    } else if presenter.can_submit() {
        Line::from(Span::styled(
            " Confirm ",
            Style::default()
                .fg(palette.contrast)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            "Select an alternative to confirm",
            palette.dim_style(),
        ))
    };

    let paragraph = Paragraph::new(vec![Line::from(""), line]).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
