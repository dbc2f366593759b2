//! Input processing for the quiz client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quiz_core::ScreenPhase;

use crate::state::{LandingFocus, Page};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Append a character to the name input.
    TypeChar(char),
    /// Erase the last character of the name input.
    EraseChar,
    /// Move focus or selection forward.
    Next,
    /// Move focus or selection backward.
    Prev,
    /// Jump straight to an alternative by list index (keys 1-9).
    Choose(usize),
    /// Activate the focused widget or confirm the selection.
    Activate,
    /// Leave the session and return to the landing screen.
    Leave,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into client commands.
///
/// The active page decides the binding set. Ctrl+C quits everywhere, and on
/// the landing screen the name field captures printable keys while focused.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, page: &Page) -> KeyAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyAction::Quit;
        }

        match page {
            Page::Landing(landing) => self.handle_landing(key, landing.focus),
            Page::Fetching(_) => self.handle_fetching(key),
            Page::Session(session) => self.handle_session(key, session.driver.session().phase()),
        }
    }

    /// Handle input on the landing screen (name entry, play, peer list).
    fn handle_landing(&self, key: KeyEvent, focus: LandingFocus) -> KeyAction {
        // While the name field has focus, printable keys type into it.
        if focus == LandingFocus::Name {
            return match key.code {
                KeyCode::Char(c) => KeyAction::TypeChar(c),
                KeyCode::Backspace => KeyAction::EraseChar,
                KeyCode::Enter => KeyAction::Activate,
                KeyCode::Tab | KeyCode::Down => KeyAction::Next,
                KeyCode::BackTab | KeyCode::Up => KeyAction::Prev,
                KeyCode::Esc => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::Activate,
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => KeyAction::Next,
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => KeyAction::Prev,
            _ => KeyAction::None,
        }
    }

    /// Handle input while a peer fetch is in flight.
    fn handle_fetching(&self, key: KeyEvent) -> KeyAction {
        // The fetch itself is not cancellable; only quitting the app is.
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Handle input inside a running session, by screen phase.
    fn handle_session(&self, key: KeyEvent, phase: ScreenPhase) -> KeyAction {
        match phase {
            ScreenPhase::Loading => match key.code {
                KeyCode::Char('q') => KeyAction::Quit,
                KeyCode::Esc => KeyAction::Leave,
                _ => KeyAction::None,
            },
            ScreenPhase::Quiz => match key.code {
                KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => KeyAction::Prev,
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => KeyAction::Next,
                KeyCode::Char(c @ '1'..='9') => KeyAction::Choose(c as usize - '1' as usize),
                KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Activate,
                KeyCode::Esc => KeyAction::Leave,
                KeyCode::Char('q') => KeyAction::Quit,
                _ => KeyAction::None,
            },
            ScreenPhase::Result => match key.code {
                KeyCode::Enter | KeyCode::Esc => KeyAction::Leave,
                KeyCode::Char('q') => KeyAction::Quit,
                _ => KeyAction::None,
            },
        }
    }
}
