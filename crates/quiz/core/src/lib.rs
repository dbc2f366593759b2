//! Deterministic quiz logic and data types shared across clients.
//!
//! `quiz-core` defines the canonical quiz document model (questions, themes)
//! and a pure session state machine. Nothing here owns a clock or performs
//! I/O: the timed transitions are plain methods that hosts call when their
//! timers fire, so the whole ruleset can be driven synchronously in tests.
pub mod presenter;
pub mod question;
pub mod score;
pub mod session;
pub mod timing;

pub use presenter::Presenter;
pub use question::{DbError, Question, QuizDb, Theme, ThemeColors};
pub use score::{Summary, score};
pub use session::{Advance, QuizSession, Screen, ScreenPhase, SessionError, Verdict};
pub use timing::{LOADING_DELAY, QuizTiming, REVEAL_DELAY};
