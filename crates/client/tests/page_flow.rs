use async_trait::async_trait;
use quiz_client::message::MessageLog;
use quiz_client::session::QuizOrigin;
use quiz_client::state::{FetchOutcome, FetchingState, LandingFocus, Page};
use quiz_core::{Question, QuizDb, QuizTiming, ScreenPhase, Theme, ThemeColors};
use quiz_peer::{FetchError, PeerAddress, QuizFetcher};
use tokio::time::Instant;

#[tokio::test]
async fn failed_fetch_returns_to_landing_with_the_name_kept() {
    let address = PeerAddress::new("retroquiz", "pixelpaula");
    let fetcher: Box<dyn QuizFetcher> = Box::new(StubFetcher { fail: true });
    let outcome = FetchOutcome {
        address: address.clone(),
        result: fetcher.fetch_db(&address).await,
    };

    let page = Page::Fetching(FetchingState {
        address,
        player: "Ada".to_string(),
    });
    let mut messages = MessageLog::new(4);
    let page = page.resolve_fetch(outcome, QuizTiming::default(), Instant::now(), &mut messages);

    let Page::Landing(landing) = page else {
        panic!("expected the landing page");
    };
    assert_eq!(landing.name, "Ada");
    assert_eq!(landing.focus, LandingFocus::Play);

    let notice = messages.latest().expect("a notice should be queued");
    assert!(notice.text.contains("retroquiz__pixelpaula"));
}

#[tokio::test]
async fn successful_fetch_runs_the_peer_quiz_to_its_result() {
    let address = PeerAddress::new("retroquiz", "pixelpaula");
    let fetcher: Box<dyn QuizFetcher> = Box::new(StubFetcher { fail: false });
    let now = Instant::now();
    let outcome = FetchOutcome {
        address: address.clone(),
        result: fetcher.fetch_db(&address).await,
    };

    let page = Page::Fetching(FetchingState {
        address: address.clone(),
        player: "Ada".to_string(),
    });
    let mut messages = MessageLog::new(4);
    let timing = QuizTiming::default();
    let page = page.resolve_fetch(outcome, timing, now, &mut messages);

    let Page::Session(mut session) = page else {
        panic!("expected a session page");
    };
    assert_eq!(session.player, "Ada");
    assert_eq!(session.origin, QuizOrigin::Peer(address));
    assert_eq!(session.driver.session().phase(), ScreenPhase::Loading);

    // The loading hold applies to fetched quizzes too.
    let t0 = now + timing.loading_delay;
    session.driver.poll(t0).expect("loading should finish");
    assert_eq!(session.driver.session().phase(), ScreenPhase::Quiz);

    session.driver.select(1).unwrap();
    let verdict = session.driver.submit(t0).unwrap();
    assert!(verdict.is_correct);
    assert!(verdict.is_last);

    session.driver.poll(t0 + timing.reveal_delay).expect("reveal should conclude");
    assert_eq!(session.driver.session().phase(), ScreenPhase::Result);
    assert_eq!(session.driver.session().results(), &[true]);

    // The fetched document travels with the session for theming.
    assert_eq!(session.db.title, "Stub quiz");
}

struct StubFetcher {
    fail: bool,
}

#[async_trait]
impl QuizFetcher for StubFetcher {
    async fn fetch_db(&self, _address: &PeerAddress) -> Result<QuizDb, FetchError> {
        if self.fail {
            Err(FetchError::Http {
                status: reqwest::StatusCode::NOT_FOUND,
            })
        } else {
            Ok(stub_db())
        }
    }
}

fn stub_db() -> QuizDb {
    QuizDb {
        title: "Stub quiz".to_string(),
        description: "served by a test double".to_string(),
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
            title: "Pick the second".to_string(),
            description: String::new(),
            image: String::new(),
            alternatives: vec!["first".to_string(), "second".to_string()],
            answer: 1,
        }],
        external: Vec::new(),
    }
}
