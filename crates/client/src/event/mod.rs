//! Event loop wiring for the terminal client.

mod r#loop;

pub use r#loop::EventLoop;
