//! Peer quiz HTTP client.

use async_trait::async_trait;
use quiz_core::{DbError, QuizDb};

use crate::address::PeerAddress;

/// Hosting domain community quizzes are served from by default.
pub const DEFAULT_PEER_HOST: &str = "vercel.app";

/// Errors produced while fetching a peer quiz database.
///
/// The variants separate transport failures from bad responses so callers
/// can log a precise reason, even when the user-facing handling is the same
/// for all of them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("peer request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("peer responded with HTTP {status}")]
    Http { status: reqwest::StatusCode },

    #[error("peer response is not a quiz document: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("peer quiz document is invalid: {0}")]
    Invalid(#[from] DbError),
}

/// Read access to peer quiz databases.
///
/// Hosts depend on this seam rather than on a concrete HTTP client so tests
/// can swap in a canned fetcher.
#[async_trait]
pub trait QuizFetcher: Send + Sync {
    /// Fetch and validate the quiz database published by `address`.
    async fn fetch_db(&self, address: &PeerAddress) -> Result<QuizDb, FetchError>;
}

/// Fetches peer quiz databases over HTTPS.
pub struct PeerDbClient {
    http_client: reqwest::Client,
    host: String,
}

impl PeerDbClient {
    /// Create a client for the given hosting domain.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            host: host.into(),
        }
    }

    /// Hosting domain requests are sent to.
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Default for PeerDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_PEER_HOST)
    }
}

#[async_trait]
impl QuizFetcher for PeerDbClient {
    async fn fetch_db(&self, address: &PeerAddress) -> Result<QuizDb, FetchError> {
        let url = address.db_url(&self.host);

        tracing::debug!("Fetching peer quiz db: {}", url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        // Read the body as text first so decode failures can be told apart
        // from transport failures.
        let body = response.text().await.map_err(FetchError::Network)?;
        let db: QuizDb = serde_json::from_str(&body).map_err(FetchError::Decode)?;
        db.validate()?;

        tracing::info!(
            "✓ Peer quiz db fetched: {} ({} questions)",
            address,
            db.questions.len()
        );

        Ok(db)
    }
}
