//! Terminal quiz client.
//!
//! Pages, input handling, and rendering for the interactive quiz UI. The
//! binary in `main.rs` wires [`app::QuizApp`] to the environment; everything
//! else is plain library code, so integration tests can drive the pages and
//! the session driver without a terminal.

pub mod app;
pub mod config;
pub mod event;
pub mod input;
pub mod logging;
pub mod message;
pub mod presentation;
pub mod session;
pub mod state;

pub use app::QuizApp;
pub use config::ClientConfig;
