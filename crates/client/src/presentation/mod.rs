//! Rendering layer: terminal lifecycle, theming, and screen widgets.

pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
