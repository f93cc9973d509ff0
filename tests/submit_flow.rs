//! Submit flow tests
//!
//! Drives the validate → submit → outcome cycle with a recording fake
//! client: no terminal, no live service.
//!
//! Run: cargo test --test submit_flow

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::mpsc;

use phonecheck::predict::{EnsembleResult, PredictClient, PredictError, PredictionOutcome};
use phonecheck::survey::SurveyAnswers;
use phonecheck::tui::{spawn_predict, AppState, FlashKind, Phase, Theme};

enum Reply {
    Success(PredictionOutcome),
    Failure(u16),
}

/// Fake prediction client recording every payload it receives
struct FakeClient {
    calls: AtomicUsize,
    bodies: Mutex<Vec<serde_json::Value>>,
    reply: Reply,
}

impl FakeClient {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
            reply,
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictClient for FakeClient {
    async fn predict(&self, answers: &SurveyAnswers) -> Result<PredictionOutcome, PredictError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies
            .lock()
            .unwrap()
            .push(serde_json::to_value(answers).unwrap());
        match &self.reply {
            Reply::Success(outcome) => Ok(outcome.clone()),
            Reply::Failure(status) => Err(PredictError::Service {
                status: *status,
                body: String::new(),
            }),
        }
    }
}

fn filled_state() -> AppState {
    let mut state = AppState::new(Theme::default(), "http://localhost:5001/predict");
    state.form.name = "Meera".to_string();
    state.form.age = "22".to_string();
    state.form.gender = Some(1);
    state.form.answers = [Some(0); 16];
    state.form.notification_checks = Some(1);
    state.form.games_hours = "1".to_string();
    state
}

fn low_risk_outcome() -> PredictionOutcome {
    PredictionOutcome {
        ensemble_result: EnsembleResult {
            algorithm: "Ensemble (5 Models)".to_string(),
            prediction: "Low Risk".to_string(),
            confidence: 0.9,
            accuracy: 91.0,
            addiction_percentage: 12.0,
        },
        results: Vec::new(),
    }
}

/// Mirror of the controller's submit path: only a validated form spawns a
/// request.
fn try_submit(
    state: &mut AppState,
    client: &Arc<FakeClient>,
    tx: &mpsc::UnboundedSender<Result<PredictionOutcome, PredictError>>,
) {
    if let Some(answers) = state.start_submit() {
        spawn_predict(client.clone(), answers, tx.clone());
    }
}

#[tokio::test]
async fn unanswered_question_never_reaches_the_client() {
    let client = FakeClient::new(Reply::Success(low_risk_outcome()));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut state = filled_state();
    state.form.answers[11] = None;

    try_submit(&mut state, &client, &tx);

    assert_eq!(state.phase, Phase::Editing);
    let flash = state.flash.as_ref().expect("incomplete notice");
    assert_eq!(flash.kind, FlashKind::Notice);
    assert!(flash.text.contains("answer all questions"));

    drop(tx);
    assert!(rx.recv().await.is_none(), "no request may be in flight");
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn complete_form_issues_one_request_with_the_full_key_set() {
    let client = FakeClient::new(Reply::Success(low_risk_outcome()));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut state = filled_state();
    try_submit(&mut state, &client, &tx);
    assert_eq!(state.phase, Phase::Submitting);

    let outcome = rx.recv().await.expect("one outcome");
    state.finish_submit(outcome);
    assert_eq!(state.phase, Phase::ShowingResults);
    assert_eq!(client.call_count(), 1);

    let bodies = client.bodies.lock().unwrap();
    let body = bodies[0].as_object().unwrap();
    assert_eq!(body.len(), 21);
    for key in [
        "usePhoneForClassNotes",
        "buyBooksFromPhone",
        "batteryLastsDay",
        "runForCharger",
        "worryAboutLosingPhone",
        "takePhoneToBathroom",
        "usePhoneInSocialGatherings",
        "checkPhoneBeforeSleepAfterWaking",
        "keepPhoneNextToWhileSleeping",
        "checkEmailsCallsTextsDuringClass",
        "relyOnPhoneInAwkwardSituations",
        "onPhoneWhileWatchingTvEating",
        "panicAttackIfPhoneLeftElsewhere",
        "checkPhoneWithSomeone",
        "liveADayWithoutPhone",
        "addictedToPhone",
        "name",
        "age",
        "gender",
        "checkPhoneWithoutNotification",
        "phoneUseForPlayingGames",
    ] {
        assert!(body.contains_key(key), "missing key {key}");
    }
    assert!(body["age"].is_u64());
    assert!(body["phoneUseForPlayingGames"].is_u64());
    assert_eq!(body["gender"], "Female");
}

#[tokio::test]
async fn service_failure_releases_the_form() {
    let client = FakeClient::new(Reply::Failure(500));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut state = filled_state();
    try_submit(&mut state, &client, &tx);

    let outcome = rx.recv().await.expect("one outcome");
    state.finish_submit(outcome);

    assert_eq!(state.phase, Phase::Editing, "submit must be re-enabled");
    assert!(state.assessment.is_none(), "results stay hidden");
    assert_eq!(state.flash.as_ref().unwrap().kind, FlashKind::Error);
    // The form is still filled in and resubmittable
    assert_eq!(state.form.name, "Meera");
    assert!(state.start_submit().is_some());
}

#[tokio::test]
async fn double_submit_issues_exactly_one_request() {
    let client = FakeClient::new(Reply::Success(low_risk_outcome()));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let mut state = filled_state();
    try_submit(&mut state, &client, &tx);
    // Second submit while the first is outstanding
    try_submit(&mut state, &client, &tx);

    let outcome = rx.recv().await.expect("first outcome");
    state.finish_submit(outcome);

    drop(tx);
    assert!(rx.recv().await.is_none(), "no second request");
    assert_eq!(client.call_count(), 1);
}
