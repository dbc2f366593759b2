//! Quiz session state machine.
//!
//! [`QuizSession`] owns the fixed question list, the outcome log, and the
//! current screen. It has no clock: the timed transitions (`finish_loading`,
//! `conclude_reveal`) are plain methods the host calls when its timers fire,
//! which keeps the machine fully synchronous and deterministic.

use crate::presenter::Presenter;
use crate::question::Question;

/// Which screen the session is showing.
///
/// Per-question interaction state lives inside the `Quiz` variant, so a
/// selection or an open reveal cannot exist outside an active question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Entry hold before the first question.
    Loading,
    /// A question is on screen.
    Quiz(Presenter),
    /// Terminal screen; the session no longer accepts answers.
    Result,
}

impl Screen {
    pub fn phase(&self) -> ScreenPhase {
        match self {
            Screen::Loading => ScreenPhase::Loading,
            Screen::Quiz(_) => ScreenPhase::Quiz,
            Screen::Result => ScreenPhase::Result,
        }
    }
}

/// Discriminant-only view of [`Screen`] for logging and display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum ScreenPhase {
    Loading,
    Quiz,
    Result,
}

/// Outcome of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub is_correct: bool,
    /// True when the submitted question is the last one in the session.
    pub is_last: bool,
}

/// Where the session went when a reveal concluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the question at this index.
    Next(usize),
    /// All questions answered; the result screen is up.
    Finished,
}

/// Errors returned when a session method is called out of order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session is not on the loading screen")]
    NotLoading,

    #[error("no question is currently active")]
    NoActiveQuestion,

    #[error("alternative {index} is out of range ({len} alternatives)")]
    AlternativeOutOfRange { index: usize, len: usize },

    #[error("answer is already submitted and awaiting reveal")]
    AlreadySubmitted,

    #[error("nothing is selected to submit")]
    NothingSelected,

    #[error("no reveal is pending conclusion")]
    NoPendingReveal,
}

/// A run through a fixed question list for a single player.
///
/// Invariant: on the quiz screen, `results.len()` equals the index of the
/// question on display. The outcome of a question is appended at the same
/// moment the index moves past it (see [`QuizSession::conclude_reveal`]),
/// never earlier.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    results: Vec<bool>,
    screen: Screen,
}

impl QuizSession {
    /// Starts a session on the loading screen.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            results: Vec::new(),
            screen: Screen::Loading,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn phase(&self) -> ScreenPhase {
        self.screen.phase()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Outcomes of every concluded question, in order.
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    /// The active presenter and its question, if the quiz screen is up.
    pub fn current(&self) -> Option<(&Presenter, &Question)> {
        match &self.screen {
            Screen::Quiz(presenter) => {
                let question = self.questions.get(presenter.index())?;
                Some((presenter, question))
            }
            _ => None,
        }
    }

    /// Leaves the loading screen.
    ///
    /// Normally moves to the first question; a session built from an empty
    /// question list goes straight to the result screen.
    pub fn finish_loading(&mut self) -> Result<ScreenPhase, SessionError> {
        if !matches!(self.screen, Screen::Loading) {
            return Err(SessionError::NotLoading);
        }
        self.screen = if self.questions.is_empty() {
            Screen::Result
        } else {
            Screen::Quiz(Presenter::new(0))
        };
        Ok(self.phase())
    }

    /// Selects an alternative for the current question.
    ///
    /// The selection may change freely until submission; once the reveal is
    /// open it is locked.
    pub fn select_alternative(&mut self, alternative: usize) -> Result<(), SessionError> {
        let Screen::Quiz(presenter) = &mut self.screen else {
            return Err(SessionError::NoActiveQuestion);
        };
        if presenter.is_revealed() {
            return Err(SessionError::AlreadySubmitted);
        }
        let len = self
            .questions
            .get(presenter.index())
            .map_or(0, |question| question.alternatives.len());
        if alternative >= len {
            return Err(SessionError::AlternativeOutOfRange {
                index: alternative,
                len,
            });
        }
        presenter.select(alternative);
        Ok(())
    }

    /// Locks the selection in and opens the reveal window.
    ///
    /// The outcome is not recorded yet: the host shows the verdict for the
    /// reveal delay and then calls [`QuizSession::conclude_reveal`].
    pub fn submit(&mut self) -> Result<Verdict, SessionError> {
        let total = self.questions.len();
        let Screen::Quiz(presenter) = &mut self.screen else {
            return Err(SessionError::NoActiveQuestion);
        };
        if presenter.is_revealed() {
            return Err(SessionError::AlreadySubmitted);
        }
        let Some(selected) = presenter.selected() else {
            return Err(SessionError::NothingSelected);
        };
        let is_correct = self
            .questions
            .get(presenter.index())
            .is_some_and(|question| question.is_correct(selected));
        presenter.reveal();
        Ok(Verdict {
            is_correct,
            is_last: presenter.index() + 1 == total,
        })
    }

    /// Records the revealed outcome and advances.
    ///
    /// Appending the result and moving the index happen together here, which
    /// is what keeps `results.len()` equal to the on-screen question index at
    /// every observable point.
    pub fn conclude_reveal(&mut self) -> Result<Advance, SessionError> {
        let (index, selected) = match &self.screen {
            Screen::Quiz(presenter) if presenter.is_revealed() => match presenter.selected() {
                Some(selected) => (presenter.index(), selected),
                None => return Err(SessionError::NoPendingReveal),
            },
            Screen::Quiz(_) => return Err(SessionError::NoPendingReveal),
            _ => return Err(SessionError::NoActiveQuestion),
        };
        let is_correct = self
            .questions
            .get(index)
            .is_some_and(|question| question.is_correct(selected));
        self.results.push(is_correct);

        let next = index + 1;
        if next < self.questions.len() {
            self.screen = Screen::Quiz(Presenter::new(next));
            Ok(Advance::Next(next))
        } else {
            self.screen = Screen::Result;
            Ok(Advance::Finished)
        }
    }
}
