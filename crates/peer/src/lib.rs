//! Peer quiz discovery and retrieval.
//!
//! Community quizzes are published as static JSON databases on a shared
//! hosting domain, one subdomain per `project__user` pair. This crate names
//! those peers ([`PeerAddress`]) and fetches their documents over HTTP
//! ([`PeerDbClient`]). Retrieval sits behind the [`QuizFetcher`] trait so
//! hosts and tests can substitute the transport.

pub mod address;
pub mod client;

pub use address::{AddressError, PeerAddress};
pub use client::{DEFAULT_PEER_HOST, FetchError, PeerDbClient, QuizFetcher};
