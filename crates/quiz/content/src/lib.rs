//! Bundled quiz content and document loaders.
//!
//! This crate houses the default quiz document shipped with the client and
//! provides loaders for reading quiz JSON from disk. Content is loaded once
//! at startup and never changes during a session.

pub mod loaders;

pub use loaders::{DbLoader, LoadResult};
