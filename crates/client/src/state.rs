//! Client page state machine.
//!
//! The client is always on exactly one of three pages: the landing screen,
//! a fetch-in-progress screen for a community quiz, or a running session.
//! Transitions between pages happen here; the quiz rules themselves live in
//! `quiz_core`.
use quiz_core::{QuizDb, QuizTiming};
use quiz_peer::{FetchError, PeerAddress};
use tokio::time::Instant;

use crate::message::MessageLog;
use crate::session::{QuizOrigin, SessionPage};

/// Top-level page the client is currently showing.
#[derive(Debug)]
pub enum Page {
    Landing(LandingState),
    Fetching(FetchingState),
    Session(SessionPage),
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Landing(_) => "landing",
            Page::Fetching(_) => "fetching",
            Page::Session(_) => "session",
        }
    }

    /// Applies a completed peer fetch to the current page.
    ///
    /// Only a `Fetching` page waiting on the same address is affected. A
    /// success starts a session with the fetched quiz; a failure returns to
    /// the landing screen with the player's name kept and a notice queued.
    pub fn resolve_fetch(
        self,
        outcome: FetchOutcome,
        timing: QuizTiming,
        now: Instant,
        messages: &mut MessageLog,
    ) -> Page {
        let fetching = match self {
            Page::Fetching(state) => state,
            other => return other,
        };
        if fetching.address != outcome.address {
            // Result of a fetch this page is no longer waiting on.
            return Page::Fetching(fetching);
        }

        match outcome.result {
            Ok(db) => {
                tracing::info!("✓ Community quiz ready: {}", outcome.address);
                Page::Session(SessionPage::start(
                    db,
                    fetching.player,
                    QuizOrigin::Peer(outcome.address),
                    timing,
                    now,
                ))
            }
            Err(error) => {
                tracing::warn!("Fetch failed for {}: {error}", outcome.address);
                messages.push_warning(format!("Could not open {}", outcome.address.slug()));
                Page::Landing(LandingState::with_name(fetching.player))
            }
        }
    }
}

/// Which landing widget owns keyboard focus.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LandingFocus {
    /// The name input field.
    Name,
    /// The play button.
    Play,
    /// A community quiz entry, by list index.
    Peer(usize),
}

/// Landing screen state: the typed player name and the focused widget.
#[derive(Clone, Debug)]
pub struct LandingState {
    pub name: String,
    pub focus: LandingFocus,
}

impl LandingState {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            focus: LandingFocus::Name,
        }
    }

    /// Landing screen pre-filled with a name, as when returning from a
    /// session or a failed fetch.
    pub fn with_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let focus = if name.trim().is_empty() {
            LandingFocus::Name
        } else {
            LandingFocus::Play
        };
        Self { name, focus }
    }

    /// A quiz can only start once the player has typed a non-blank name.
    pub fn can_play(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn focus_next(&mut self, peer_count: usize) {
        self.focus = match self.focus {
            LandingFocus::Name => LandingFocus::Play,
            LandingFocus::Play if peer_count > 0 => LandingFocus::Peer(0),
            LandingFocus::Play => LandingFocus::Name,
            LandingFocus::Peer(index) if index + 1 < peer_count => LandingFocus::Peer(index + 1),
            LandingFocus::Peer(_) => LandingFocus::Name,
        };
    }

    pub fn focus_prev(&mut self, peer_count: usize) {
        self.focus = match self.focus {
            LandingFocus::Name if peer_count > 0 => LandingFocus::Peer(peer_count - 1),
            LandingFocus::Name => LandingFocus::Play,
            LandingFocus::Play => LandingFocus::Name,
            LandingFocus::Peer(0) => LandingFocus::Play,
            LandingFocus::Peer(index) => LandingFocus::Peer(index - 1),
        };
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.name.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.name.pop();
    }
}

impl Default for LandingState {
    fn default() -> Self {
        Self::new()
    }
}

/// A peer fetch in flight. The screen shows a spinner until the outcome
/// arrives over the event loop's channel.
#[derive(Clone, Debug)]
pub struct FetchingState {
    pub address: PeerAddress,
    pub player: String,
}

/// A community quiz shown on the landing screen.
#[derive(Clone, Debug)]
pub struct PeerEntry {
    pub address: PeerAddress,
    pub url: String,
}

impl PeerEntry {
    /// Parses the `external` URL list of a quiz database into peer entries.
    ///
    /// Returns the parsed entries and the URLs that were rejected.
    pub fn from_urls(urls: &[String]) -> (Vec<PeerEntry>, Vec<String>) {
        let mut entries = Vec::new();
        let mut rejected = Vec::new();
        for url in urls {
            match PeerAddress::from_external_url(url) {
                Ok(address) => entries.push(PeerEntry {
                    address,
                    url: url.clone(),
                }),
                Err(_) => rejected.push(url.clone()),
            }
        }
        (entries, rejected)
    }
}

/// Result of a background peer fetch, delivered back to the event loop.
#[derive(Debug)]
pub struct FetchOutcome {
    pub address: PeerAddress,
    pub result: Result<QuizDb, FetchError>,
}

#[cfg(test)]
mod tests {
    use quiz_core::{DbError, Question, Screen, Theme, ThemeColors};

    use super::*;

    fn sample_db() -> QuizDb {
        QuizDb {
            title: "Sample".to_string(),
            description: "A sample quiz".to_string(),
            bg: "https://example.com/bg.jpg".to_string(),
            theme: Theme {
                colors: ThemeColors {
                    primary: "#FFB300".to_string(),
                    secondary: "#29B6F6".to_string(),
                    main_bg: "#0D0D1A".to_string(),
                    contrast_text: "#FFFFFF".to_string(),
                    wrong: "#FF5252".to_string(),
                    success: "#66BB6A".to_string(),
                },
            },
            questions: vec![Question {
                title: "Pick one".to_string(),
                description: String::new(),
                image: String::new(),
                alternatives: vec!["a".to_string(), "b".to_string()],
                answer: 0,
            }],
            external: Vec::new(),
        }
    }

    fn fetching_page(player: &str) -> (Page, PeerAddress) {
        let address = PeerAddress::new("retroquiz", "pixelpaula");
        let page = Page::Fetching(FetchingState {
            address: address.clone(),
            player: player.to_string(),
        });
        (page, address)
    }

    #[test]
    fn focus_cycles_through_name_play_and_peers() {
        let mut landing = LandingState::new();

        landing.focus_next(2);
        assert_eq!(landing.focus, LandingFocus::Play);
        landing.focus_next(2);
        assert_eq!(landing.focus, LandingFocus::Peer(0));
        landing.focus_next(2);
        assert_eq!(landing.focus, LandingFocus::Peer(1));
        landing.focus_next(2);
        assert_eq!(landing.focus, LandingFocus::Name);

        landing.focus_prev(2);
        assert_eq!(landing.focus, LandingFocus::Peer(1));
    }

    #[test]
    fn focus_skips_peer_list_when_empty() {
        let mut landing = LandingState::new();

        landing.focus_next(0);
        assert_eq!(landing.focus, LandingFocus::Play);
        landing.focus_next(0);
        assert_eq!(landing.focus, LandingFocus::Name);
        landing.focus_prev(0);
        assert_eq!(landing.focus, LandingFocus::Play);
    }

    #[test]
    fn blank_names_cannot_play() {
        let mut landing = LandingState::new();
        assert!(!landing.can_play());

        landing.push_char(' ');
        assert!(!landing.can_play());

        landing.push_char('Z');
        assert!(landing.can_play());

        landing.pop_char();
        assert!(!landing.can_play());
    }

    #[test]
    fn control_characters_are_not_typed() {
        let mut landing = LandingState::new();
        landing.push_char('\t');
        landing.push_char('A');
        assert_eq!(landing.name, "A");
    }

    #[test]
    fn returning_with_a_name_focuses_play() {
        let landing = LandingState::with_name("Ada");
        assert_eq!(landing.focus, LandingFocus::Play);

        let blank = LandingState::with_name("  ");
        assert_eq!(blank.focus, LandingFocus::Name);
    }

    #[test]
    fn peer_entries_keep_order_and_reject_bad_urls() {
        let urls = vec![
            "https://retroquiz.pixelpaula.vercel.app".to_string(),
            "not a url".to_string(),
            "https://aluraquiz.devsoutinho.vercel.app".to_string(),
        ];

        let (entries, rejected) = PeerEntry::from_urls(&urls);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].address.slug(), "retroquiz__pixelpaula");
        assert_eq!(entries[1].address.slug(), "aluraquiz__devsoutinho");
        assert_eq!(rejected, vec!["not a url".to_string()]);
    }

    #[test]
    fn successful_fetch_starts_a_session() {
        let (page, address) = fetching_page("Ada");
        let mut messages = MessageLog::new(4);

        let page = page.resolve_fetch(
            FetchOutcome {
                address,
                result: Ok(sample_db()),
            },
            QuizTiming::default(),
            Instant::now(),
            &mut messages,
        );

        let Page::Session(session) = page else {
            panic!("expected a session page");
        };
        assert_eq!(session.player, "Ada");
        assert!(matches!(session.driver.session().screen(), Screen::Loading));
        assert!(messages.latest().is_none());
    }

    #[test]
    fn failed_fetch_returns_to_landing_with_name() {
        let (page, address) = fetching_page("Ada");
        let mut messages = MessageLog::new(4);

        let page = page.resolve_fetch(
            FetchOutcome {
                address,
                result: Err(FetchError::Invalid(DbError::NoQuestions)),
            },
            QuizTiming::default(),
            Instant::now(),
            &mut messages,
        );

        let Page::Landing(landing) = page else {
            panic!("expected the landing page");
        };
        assert_eq!(landing.name, "Ada");
        assert_eq!(landing.focus, LandingFocus::Play);
        let notice = messages.latest().unwrap();
        assert!(notice.text.contains("retroquiz__pixelpaula"));
    }

    #[test]
    fn mismatched_outcome_leaves_fetching_page_alone() {
        let (page, _) = fetching_page("Ada");
        let mut messages = MessageLog::new(4);

        let page = page.resolve_fetch(
            FetchOutcome {
                address: PeerAddress::new("other", "peer"),
                result: Err(FetchError::Invalid(DbError::NoQuestions)),
            },
            QuizTiming::default(),
            Instant::now(),
            &mut messages,
        );

        assert!(matches!(page, Page::Fetching(_)));
        assert!(messages.latest().is_none());
    }

    #[test]
    fn outcome_on_landing_page_is_ignored() {
        let page = Page::Landing(LandingState::new());
        let mut messages = MessageLog::new(4);

        let page = page.resolve_fetch(
            FetchOutcome {
                address: PeerAddress::new("retroquiz", "pixelpaula"),
                result: Ok(sample_db()),
            },
            QuizTiming::default(),
            Instant::now(),
            &mut messages,
        );

        assert!(matches!(page, Page::Landing(_)));
    }
}
