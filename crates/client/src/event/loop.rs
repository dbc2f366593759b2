//! Event loop orchestrating quiz timers, peer fetches, user input, and
//! rendering.
//!
//! This module coordinates three main concerns:
//! - Session timer polling (loading hold and reveal conclusion)
//! - Keyboard input processing (typing, navigation, submission)
//! - Peer fetch completion (delivered over a channel from a spawned task)
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use quiz_core::{QuizDb, QuizTiming, ScreenPhase, Summary};
use quiz_peer::{PeerAddress, QuizFetcher};
use tokio::{
    sync::mpsc,
    time::{self, Duration, Instant},
};

use crate::{
    config::ClientConfig,
    input::{InputHandler, KeyAction},
    message::MessageLog,
    presentation::{terminal::Tui, ui},
    session::{DriverEvent, QuizOrigin, SessionPage},
    state::{FetchOutcome, FetchingState, LandingFocus, LandingState, Page, PeerEntry},
};

const FRAME_INTERVAL_MS: u64 = 16;
/// Frame ticks per spinner frame (8 * 16 ms = one frame every ~128 ms).
const SPINNER_TICK_DIVISOR: u64 = 8;

pub struct EventLoop {
    db: QuizDb,
    peers: Vec<PeerEntry>,
    fetcher: Arc<dyn QuizFetcher>,
    timing: QuizTiming,
    input: InputHandler,
    messages: MessageLog,
    page: Page,
    fetch_tx: mpsc::Sender<FetchOutcome>,
    fetch_rx: Option<mpsc::Receiver<FetchOutcome>>,
    tick: u64,
    content_width: u16,
}

impl EventLoop {
    pub fn new(db: QuizDb, fetcher: Arc<dyn QuizFetcher>, config: &ClientConfig) -> Self {
        let mut messages = MessageLog::new(config.messages.capacity);
        let (peers, rejected) = PeerEntry::from_urls(&db.external);
        for url in rejected {
            tracing::warn!("Skipping malformed community quiz URL: {url}");
            messages.push_warning(format!("Skipped malformed quiz URL: {url}"));
        }

        let (fetch_tx, fetch_rx) = mpsc::channel(4);

        Self {
            db,
            peers,
            fetcher,
            timing: QuizTiming::default(),
            input: InputHandler::new(),
            messages,
            page: Page::Landing(LandingState::new()),
            fetch_tx,
            fetch_rx: Some(fetch_rx),
            tick: 0,
            content_width: config.ui.content_width,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        // Extract the receiver so select! can poll it while `self` stays
        // free for the handlers.
        let mut fetch_rx = self.fetch_rx.take();

        loop {
            tokio::select! {
                outcome = async { fetch_rx.as_mut().unwrap().recv().await }, if fetch_rx.is_some() => {
                    match outcome {
                        Some(outcome) => {
                            self.apply_fetch_outcome(outcome);
                            self.render(terminal)?;
                        }
                        None => fetch_rx = None,
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_frame_tick(terminal)? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        self.tick = self.tick.wrapping_add(1);

        if self.poll_session_timers() {
            self.render(terminal)?;
        }

        if self.handle_input_tick(terminal)? {
            return Ok(true);
        }

        // Keep the spinner moving even without input or timer activity.
        if self.shows_spinner() && self.tick % SPINNER_TICK_DIVISOR == 0 {
            self.render(terminal)?;
        }

        Ok(false)
    }

    fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        let action = self.input.handle_key(key, &self.page);
        if action == KeyAction::Quit {
            tracing::info!("Quit requested on the {} page", self.page.name());
            return Ok(true);
        }

        if self.apply_key_action(action) {
            self.render(terminal)?;
        }
        Ok(false)
    }

    /// Applies a key action to the current page. Returns true when the
    /// screen needs a redraw.
    fn apply_key_action(&mut self, action: KeyAction) -> bool {
        match &self.page {
            Page::Landing(_) => self.apply_landing_action(action),
            Page::Fetching(_) => false,
            Page::Session(_) => self.apply_session_action(action),
        }
    }

    fn apply_landing_action(&mut self, action: KeyAction) -> bool {
        // Activation may replace the whole page, so handle it before
        // borrowing the landing state.
        if action == KeyAction::Activate {
            self.activate_landing();
            return true;
        }

        let Page::Landing(landing) = &mut self.page else {
            return false;
        };
        let peer_count = self.peers.len();
        match action {
            KeyAction::TypeChar(c) => landing.push_char(c),
            KeyAction::EraseChar => landing.pop_char(),
            KeyAction::Next => landing.focus_next(peer_count),
            KeyAction::Prev => landing.focus_prev(peer_count),
            _ => return false,
        }
        true
    }

    fn activate_landing(&mut self) {
        let Page::Landing(landing) = &self.page else {
            return;
        };

        match landing.focus {
            LandingFocus::Name | LandingFocus::Play => {
                if !landing.can_play() {
                    return;
                }
                let player = landing.name.trim().to_string();
                self.start_local_session(player);
            }
            LandingFocus::Peer(index) => {
                let Some(entry) = self.peers.get(index) else {
                    return;
                };
                let address = entry.address.clone();
                let player = landing.name.trim().to_string();
                self.start_peer_fetch(address, player);
            }
        }
    }

    fn start_local_session(&mut self, player: String) {
        tracing::info!("Starting local quiz for {player:?}");
        self.page = Page::Session(SessionPage::start(
            self.db.clone(),
            player,
            QuizOrigin::Local,
            self.timing,
            Instant::now(),
        ));
    }

    fn start_peer_fetch(&mut self, address: PeerAddress, player: String) {
        tracing::info!("Fetching community quiz {address}");

        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.fetch_tx.clone();
        let fetch_address = address.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch_db(&fetch_address).await;
            // A closed channel means the loop is gone; nothing to deliver.
            let _ = tx
                .send(FetchOutcome {
                    address: fetch_address,
                    result,
                })
                .await;
        });

        self.page = Page::Fetching(FetchingState { address, player });
    }

    fn apply_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let page = std::mem::replace(&mut self.page, Page::Landing(LandingState::new()));
        self.page = page.resolve_fetch(outcome, self.timing, Instant::now(), &mut self.messages);
    }

    fn apply_session_action(&mut self, action: KeyAction) -> bool {
        // Leaving replaces the whole page, so handle it before borrowing
        // the session.
        if action == KeyAction::Leave {
            self.leave_session();
            return true;
        }

        let Page::Session(session) = &mut self.page else {
            return false;
        };
        match action {
            KeyAction::Prev => session.driver.move_selection(-1),
            KeyAction::Next => session.driver.move_selection(1),
            KeyAction::Choose(index) => {
                // Digits past the alternative list are ignored.
                let _ = session.driver.select(index);
            }
            KeyAction::Activate => match session.driver.submit(Instant::now()) {
                Ok(verdict) => {
                    tracing::debug!("Answer submitted: correct={}", verdict.is_correct);
                }
                // Nothing selected, mid-reveal, or not on a question.
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }

    fn leave_session(&mut self) {
        let page = std::mem::replace(&mut self.page, Page::Landing(LandingState::new()));
        match page {
            Page::Session(session) => {
                // Dropping the session drops its pending timer with it.
                tracing::info!(
                    "Leaving {} quiz on the {} screen",
                    session.origin,
                    session.driver.session().phase()
                );
                self.page = Page::Landing(LandingState::with_name(session.player));
            }
            other => self.page = other,
        }
    }

    /// Fires due session timers. Returns true when the screen changed.
    fn poll_session_timers(&mut self) -> bool {
        let Page::Session(session) = &mut self.page else {
            return false;
        };

        match session.driver.poll(Instant::now()) {
            Some(DriverEvent::QuizStarted) => {
                tracing::debug!("First question up for {}", session.origin);
                true
            }
            Some(DriverEvent::Advanced(index)) => {
                tracing::debug!("Advanced to question {}", index + 1);
                true
            }
            Some(DriverEvent::Finished) => {
                let summary = Summary::from_results(session.driver.session().results());
                tracing::info!(
                    "✓ Quiz finished: {}/{} correct ({}%)",
                    summary.correct,
                    summary.total,
                    summary.percent()
                );
                true
            }
            None => false,
        }
    }

    fn shows_spinner(&self) -> bool {
        match &self.page {
            Page::Fetching(_) => true,
            Page::Session(session) => session.driver.session().phase() == ScreenPhase::Loading,
            Page::Landing(_) => false,
        }
    }

    fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            page: &self.page,
            local_db: &self.db,
            peers: &self.peers,
            messages: &self.messages,
            spinner_frame: (self.tick / SPINNER_TICK_DIVISOR) as usize,
            content_width: self.content_width,
        };
        ui::render(terminal, &ctx)
    }
}
