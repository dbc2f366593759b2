//! Clock-driven adapter around [`QuizSession`].
//!
//! The session machine is synchronous; this driver owns its deadlines. At
//! most one timer is pending at a time (the loading hold or an open reveal),
//! and it is checked from the frame tick rather than a spawned task, so
//! dropping the driver cancels whatever was scheduled.
use std::fmt;

use quiz_core::{
    Advance, Question, QuizDb, QuizSession, QuizTiming, ScreenPhase, SessionError, Verdict,
};
use quiz_peer::PeerAddress;
use tokio::time::Instant;

/// Where the quiz being played came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOrigin {
    /// The bundled or locally loaded database.
    Local,
    /// A community quiz fetched from a peer deployment.
    Peer(PeerAddress),
}

impl fmt::Display for QuizOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizOrigin::Local => write!(f, "local"),
            QuizOrigin::Peer(address) => write!(f, "{address}"),
        }
    }
}

/// Timed transition performed by a poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverEvent {
    /// The loading hold ended and the first question is up.
    QuizStarted,
    /// A reveal concluded and the question at this index is up.
    Advanced(usize),
    /// The session reached the result screen.
    Finished,
}

#[derive(Clone, Copy, Debug)]
enum TimerKind {
    FinishLoading,
    ConcludeReveal,
}

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    kind: TimerKind,
    due: Instant,
}

/// Drives a [`QuizSession`] with wall-clock deadlines.
#[derive(Debug)]
pub struct SessionDriver {
    session: QuizSession,
    timing: QuizTiming,
    pending: Option<PendingTimer>,
}

impl SessionDriver {
    /// Starts a driver on the loading screen with the loading timer armed.
    pub fn new(questions: Vec<Question>, timing: QuizTiming, now: Instant) -> Self {
        Self {
            session: QuizSession::new(questions),
            timing,
            pending: Some(PendingTimer {
                kind: TimerKind::FinishLoading,
                due: now + timing.loading_delay,
            }),
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Selects an alternative on the current question.
    pub fn select(&mut self, alternative: usize) -> Result<(), SessionError> {
        self.session.select_alternative(alternative)
    }

    /// Moves the selection by `delta`, clamped to the alternative list.
    ///
    /// With nothing selected yet, the first press lands on the nearest end
    /// of the list. Ignored while a reveal is open.
    pub fn move_selection(&mut self, delta: isize) {
        let Some((presenter, question)) = self.session.current() else {
            return;
        };
        if presenter.is_revealed() {
            return;
        }
        let len = question.alternatives.len();
        if len == 0 {
            return;
        }
        let next = match presenter.selected() {
            Some(current) => (current as isize + delta).clamp(0, len as isize - 1) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        // In range by construction.
        let _ = self.session.select_alternative(next);
    }

    /// Submits the selection and arms the reveal timer.
    pub fn submit(&mut self, now: Instant) -> Result<Verdict, SessionError> {
        let verdict = self.session.submit()?;
        self.pending = Some(PendingTimer {
            kind: TimerKind::ConcludeReveal,
            due: now + self.timing.reveal_delay,
        });
        Ok(verdict)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|timer| timer.due)
    }

    /// Fires the pending timer once its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<DriverEvent> {
        let timer = self.pending?;
        if now < timer.due {
            return None;
        }
        self.pending = None;

        match timer.kind {
            TimerKind::FinishLoading => match self.session.finish_loading() {
                Ok(ScreenPhase::Result) => Some(DriverEvent::Finished),
                Ok(_) => Some(DriverEvent::QuizStarted),
                Err(error) => {
                    tracing::error!("Loading timer fired out of order: {error}");
                    None
                }
            },
            TimerKind::ConcludeReveal => match self.session.conclude_reveal() {
                Ok(Advance::Next(index)) => Some(DriverEvent::Advanced(index)),
                Ok(Advance::Finished) => Some(DriverEvent::Finished),
                Err(error) => {
                    tracing::error!("Reveal timer fired out of order: {error}");
                    None
                }
            },
        }
    }
}

/// A running session plus everything the screens need to render it.
#[derive(Debug)]
pub struct SessionPage {
    pub driver: SessionDriver,
    pub db: QuizDb,
    pub player: String,
    pub origin: QuizOrigin,
}

impl SessionPage {
    pub fn start(
        db: QuizDb,
        player: impl Into<String>,
        origin: QuizOrigin,
        timing: QuizTiming,
        now: Instant,
    ) -> Self {
        Self {
            driver: SessionDriver::new(db.questions.clone(), timing, now),
            db,
            player: player.into(),
            origin,
        }
    }
}
