//! Glue code tying configuration, content loading, and the terminal UI
//! together.
use std::sync::Arc;

use anyhow::{Context, Result};

use quiz_content::DbLoader;
use quiz_core::QuizDb;
use quiz_peer::{PeerDbClient, QuizFetcher};

use crate::config::ClientConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;

pub struct QuizApp {
    config: ClientConfig,
    db: QuizDb,
    fetcher: Arc<dyn QuizFetcher>,
}

pub struct QuizAppBuilder {
    config: ClientConfig,
}

impl QuizAppBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<QuizApp> {
        let db = match &self.config.db_path {
            Some(path) => DbLoader::load(path)
                .with_context(|| format!("loading quiz database from {}", path.display()))?,
            None => DbLoader::bundled()?,
        };
        tracing::info!(
            "Quiz database ready: {:?} ({} questions, {} community links)",
            db.title,
            db.questions.len(),
            db.external.len()
        );

        let fetcher: Arc<dyn QuizFetcher> =
            Arc::new(PeerDbClient::new(self.config.peer_host.clone()));

        Ok(QuizApp {
            config: self.config,
            db,
            fetcher,
        })
    }
}

impl QuizApp {
    pub fn builder(config: ClientConfig) -> QuizAppBuilder {
        QuizAppBuilder::new(config)
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("Quiz client starting...");

        let QuizApp {
            config,
            db,
            fetcher,
        } = self;

        let event_loop = EventLoop::new(db, fetcher, &config);

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("Quiz client exiting");

        Ok(())
    }
}
